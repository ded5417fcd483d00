// src/cli/bookmark_commands.rs
use crate::application::error::ApplicationError;
use crate::application::services::bookmark_service::BookmarkService;
use crate::cli::error::{CliError, CliResult};
use crate::domain::error::DomainError;
use crate::infrastructure::export::ExportFormat;
use crate::infrastructure::repositories::sqlite::repository::SqliteBookmarkRepository;
use crate::util::helper::{confirm, ensure_int_vector};
use itertools::Itertools;
use std::io::Write;
use std::path::Path;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};
use tracing::{info, instrument};

// Helper function to get and validate IDs
fn get_ids(ids: &str) -> CliResult<Vec<i64>> {
    let string_vec = ids.split(',').map(|s| s.trim().to_string()).collect_vec();
    ensure_int_vector(&string_vec)
        .ok_or_else(|| CliError::InvalidIdFormat(format!("Invalid ID format: {}", ids)))
}

fn report(stderr: &mut StandardStream, color: Color, msg: &str) -> CliResult<()> {
    stderr.set_color(ColorSpec::new().set_fg(Some(color)))?;
    writeln!(stderr, "{}", msg)?;
    stderr.reset()?;
    Ok(())
}

fn write_rendered(out: &str) {
    print!("{}", out);
    if !out.ends_with('\n') {
        println!();
    }
}

#[instrument(skip(service))]
pub fn add(
    service: &dyn BookmarkService,
    url: &str,
    name: Option<&str>,
    no_web: bool,
) -> CliResult<()> {
    let bookmark = service.add_bookmark(url, name, !no_web)?;
    info!("Added bookmark: {}", bookmark);
    println!("{}", bookmark.id);
    Ok(())
}

#[instrument(skip(service))]
pub fn list(service: &dyn BookmarkService, is_json: bool, is_md: bool) -> CliResult<()> {
    let bookmarks = service.get_all_bookmarks()?;
    if bookmarks.is_empty() {
        return Err(ApplicationError::EmptyResult("No bookmarks found".to_string()).into());
    }

    let format = match (is_json, is_md) {
        (true, _) => ExportFormat::Json,
        (false, true) => ExportFormat::Markdown,
        _ => ExportFormat::Text,
    };
    write_rendered(&format.render(&bookmarks)?);
    Ok(())
}

#[instrument(skip(stderr, service))]
pub fn show(stderr: &mut StandardStream, service: &dyn BookmarkService, ids: &str) -> CliResult<()> {
    for id in get_ids(ids)? {
        match service.get_bookmark(id)? {
            Some(bookmark) => println!("{}", bookmark),
            None => report(stderr, Color::Yellow, &format!("Bookmark with ID {} not found", id))?,
        }
    }
    Ok(())
}

#[instrument(skip(stderr, service))]
pub fn open(stderr: &mut StandardStream, service: &dyn BookmarkService, ids: &str) -> CliResult<()> {
    for id in get_ids(ids)? {
        match service.open_bookmark(id) {
            Ok(bookmark) => report(stderr, Color::Green, &format!("Opened: {}", bookmark.url))?,
            Err(ApplicationError::BookmarkNotFound(id)) => {
                report(stderr, Color::Yellow, &format!("Bookmark with ID {} not found", id))?
            }
            Err(e) => return Err(CliError::from(e).context(format!("Open bookmark {}", id))),
        }
    }
    Ok(())
}

#[instrument(skip(service))]
pub fn update(
    service: &dyn BookmarkService,
    id: i64,
    name: Option<&str>,
    url: Option<&str>,
) -> CliResult<()> {
    let bookmark = service.update_bookmark(id, name, url)?;
    println!("{}", bookmark);
    Ok(())
}

/// Unknown ids are reported and skipped
#[instrument(skip(stderr, service))]
pub fn delete(stderr: &mut StandardStream, service: &dyn BookmarkService, ids: &str) -> CliResult<()> {
    for id in get_ids(ids)? {
        if service.delete_bookmark(id)? {
            report(stderr, Color::Green, &format!("Deleted bookmark with ID {}", id))?;
        } else {
            report(stderr, Color::Yellow, &format!("Bookmark with ID {} not found", id))?;
        }
    }
    Ok(())
}

#[instrument(skip(service))]
pub fn delete_all(service: &dyn BookmarkService, yes: bool) -> CliResult<()> {
    if !yes && !confirm("Delete all bookmarks?") {
        return Err(CliError::OperationAborted);
    }
    let deleted = service.delete_all_bookmarks()?;
    info!("Deleted {} bookmarks", deleted);
    println!("{}", deleted);
    Ok(())
}

#[instrument(skip(stderr, service))]
pub fn export(stderr: &mut StandardStream, service: &dyn BookmarkService, path: &Path) -> CliResult<()> {
    let format = ExportFormat::from_path(path);
    let count = service.export_bookmarks(path, format)?;
    report(
        stderr,
        Color::Green,
        &format!("Exported {} bookmarks to {}", count, path.display()),
    )
}

#[instrument(skip(stderr, service))]
pub fn import(stderr: &mut StandardStream, service: &dyn BookmarkService, path: &Path) -> CliResult<()> {
    let summary = service
        .import_bookmarks(path)
        .map_err(|e| CliError::from(e).context(format!("Import from {}", path.display())))?;
    report(
        stderr,
        Color::Green,
        &format!(
            "Imported {} bookmarks, skipped {} already stored",
            summary.added, summary.skipped
        ),
    )
}

/// Create an empty store at `path`, refusing to touch an existing file
#[instrument]
pub fn create_db(path: &str) -> CliResult<()> {
    if Path::new(path).exists() {
        return Err(CliError::InvalidInput(format!(
            "Database already exists at: {}. Please choose a different path or delete the existing file.",
            path
        )));
    }

    SqliteBookmarkRepository::from_url(path).map_err(DomainError::from)?;
    eprintln!("Database created successfully at: {}", path);
    Ok(())
}
