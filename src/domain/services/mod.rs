pub mod title_fetcher;
pub mod url_opener;
