use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_syntax::ast::SyntaxNode;
use libgraphql_syntax::compat_graphql_parser_v0_4::parse_schema_document;
use libgraphql_syntax::SyntaxKind;
use libgraphql_syntax::SyntaxNavigator;
use libgraphql_syntax::SyntaxVisitor;
use libgraphql_syntax::VisitFlow;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CoordinatesCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for CoordinatesCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];
        let file_paths = self.find_graphql_files(&mut errors);
        log::debug!(
            "Found {} GraphQL files to collect coordinates from.",
            file_paths.len(),
        );
        if file_paths.is_empty() && errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No GraphQL files found at or under the given paths.",
                output_utils::RED_X,
            ));
        }

        let mut lines = vec![];
        for file_path in &file_paths {
            match collect_coordinates(file_path).await {
                Ok(coordinates) => {
                    log::debug!(
                        "Collected {} coordinates from {file_path:#?}.",
                        coordinates.len(),
                    );
                    lines.extend(coordinates);
                },
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            return CommandResult::stdout(format_args!("{}", lines.join("\n")));
        }

        let stderr = errors
            .iter()
            .map(|e| format!("{} {e:#}", output_utils::RED_X))
            .collect::<Vec<_>>()
            .join("\n");
        CommandResult::failed_with_output(lines.join("\n"), stderr)
    }
}

impl CoordinatesCmd {
    /// Every file at or under each input path whose extension is one of
    /// `--graphql-file-exts`, in the order the paths were given.
    fn find_graphql_files(&self, errors: &mut Vec<anyhow::Error>) -> Vec<PathBuf> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        if path.extension()
                            .and_then(|ext| ext.to_str())
                            .is_some_and(|ext| graphql_file_exts.contains(ext)) {
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                    },
                }
            }
        }

        // A single file passed explicitly is used even if its extension
        // isn't one of `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to read {first_arg_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        file_paths
    }
}

async fn collect_coordinates(file_path: &Path) -> anyhow::Result<Vec<String>> {
    let source = tokio::fs::read_to_string(file_path)
        .await
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let doc = parse_schema_document(&source)
        .with_context(|| format!("Failed to parse {}", file_path.display()))?;

    let mut collector = CoordinateCollector::default();
    libgraphql_syntax::walk(&doc, &mut collector);
    match collector.error {
        Some(e) => Err(e).with_context(|| {
            format!("Failed to build a coordinate in {}", file_path.display())
        }),
        None => Ok(collector.coordinates),
    }
}

/// Records the schema coordinate of each schema element as the walk enters
/// it.
#[derive(Default)]
struct CoordinateCollector {
    coordinates: Vec<String>,
    error: Option<libgraphql_syntax::SyntaxError>,
}

impl<'a> SyntaxVisitor<'a> for CoordinateCollector {
    fn enter(
        &mut self,
        node: SyntaxNode<'a>,
        navigator: &SyntaxNavigator<'a>,
    ) -> VisitFlow {
        if !is_schema_element(node.kind()) {
            return VisitFlow::Next;
        }
        match navigator.create_schema_coordinate() {
            Ok(coordinate) => {
                self.coordinates.push(coordinate.to_string());
                VisitFlow::Next
            },
            Err(e) => {
                self.error = Some(e);
                VisitFlow::Break
            },
        }
    }
}

fn is_schema_element(kind: SyntaxKind) -> bool {
    kind.is_type_definition()
        || kind.is_type_extension()
        || matches!(
            kind,
            SyntaxKind::FieldDefinition
                | SyntaxKind::InputValueDefinition
                | SyntaxKind::EnumValueDefinition
                | SyntaxKind::DirectiveDefinition
        )
}
