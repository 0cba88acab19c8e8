use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The GraphQL files found under a set of file or directory arguments.
#[derive(Debug, Default)]
pub(crate) struct GraphQLFiles {
    pub paths: Vec<PathBuf>,
    /// Files under a directory argument skipped for their extension.
    pub num_skipped: usize,
}

/// Normalizes extensions to a leading-dot form (`graphql` -> `.graphql`).
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

/// Finds GraphQL files at or under each of `paths`, in a stable order.
///
/// A path naming a file is always included, whatever its extension; the
/// user asked for it explicitly. Files found by walking a directory are
/// filtered by `exts`.
pub(crate) fn find_graphql_files(
    paths: &[PathBuf],
    exts: &HashSet<String>,
) -> Result<GraphQLFiles, walkdir::Error> {
    log::debug!("Scanning {} input paths...", paths.len());

    let mut found = GraphQLFiles::default();
    for path in paths {
        if path.is_file() {
            found.paths.push(path.to_owned());
            continue;
        }

        for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let matches_ext = entry_path
                .extension()
                .is_some_and(|ext| exts.contains(&format!(".{}", ext.to_string_lossy())));
            if matches_ext {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                found.paths.push(entry_path.to_path_buf());
            } else {
                log::trace!("Skipping non-GraphQL file: {entry_path:#?}.");
                found.num_skipped += 1;
            }
        }
    }

    log::debug!("Found {} GraphQL files.", found.paths.len());
    Ok(found)
}
