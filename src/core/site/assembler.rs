//! Site assembly: builds every page for a graph and writes them out
//!
//! All documents are built and rendered in memory first. Only then is the
//! output touched, in this order: reset, `styles.css`, `index.html`, one
//! `node_<id>.html` per graph key, `viz.html`.

use crate::core::error::{Result, SiteError};
use crate::core::models::{GraphModel, NodeKey};
use crate::core::site::index_page::{IndexPageBuilder, DEFAULT_TITLE};
use crate::core::site::node_page::NodePageBuilder;
use crate::core::site::output::{SiteFile, SiteOutput};
use crate::core::site::render::SiteRenderer;
use crate::core::site::theme::{Stylesheet, Theme, VisualizationSettings};
use crate::core::site::visualization::VisualizationDataBuilder;
use crate::core::site::{node_page_file, INDEX_FILE, STYLESHEET_FILE, VISUALIZATION_FILE};
use crate::{debug, info, warn};

/// Presentation options for one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct SiteOptions {
    /// Landing page title
    pub title: String,
    /// Page theme
    pub theme: Theme,
    /// Stylesheet copied to `styles.css`
    pub stylesheet: Stylesheet,
    /// Force layout parameters
    pub visualization: VisualizationSettings,
}

impl SiteOptions {
    /// Options for a theme, using its built-in stylesheet
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            stylesheet: Stylesheet::Builtin(theme),
            ..Self::default()
        }
    }
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: Theme::default(),
            stylesheet: Stylesheet::default(),
            visualization: VisualizationSettings::default(),
        }
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// File names in the order they were written
    pub files: Vec<String>,
    /// Number of node pages
    pub node_pages: usize,
    /// Number of link records in the visualization payload
    pub link_records: usize,
    /// Neighbor ids without a page
    pub dangling_references: Vec<String>,
    /// Starting ids without a page
    pub missing_starting_nodes: Vec<String>,
}

/// Turns a graph and its starting nodes into a complete site
#[derive(Debug, Clone, Default)]
pub struct SiteAssembler {
    options: SiteOptions,
    renderer: SiteRenderer,
    index_builder: IndexPageBuilder,
}

impl SiteAssembler {
    /// Create an assembler with the given options
    #[must_use]
    pub fn new(options: SiteOptions) -> Self {
        let renderer = SiteRenderer::new(options.theme, options.visualization);
        let index_builder = IndexPageBuilder::new(options.title.clone());
        Self {
            options,
            renderer,
            index_builder,
        }
    }

    /// Options this assembler was created with
    #[must_use]
    pub const fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Build and render every document without writing anything
    ///
    /// Files come back in write order.
    ///
    /// # Errors
    /// Returns an error if a graph key cannot be used as a page name, two keys
    /// share a canonical id, or rendering fails
    pub fn render<N: NodeKey>(
        &self,
        graph: &GraphModel<N>,
        starting_nodes: &[N],
    ) -> Result<Vec<SiteFile>> {
        validate_keys(graph)?;

        let mut files = Vec::with_capacity(graph.node_count() + 3);
        files.push(SiteFile::new(
            STYLESHEET_FILE,
            self.options.stylesheet.contents(),
        ));

        let index = self.index_builder.build(starting_nodes);
        files.push(SiteFile::new(
            INDEX_FILE,
            self.renderer.render_index_page(&index)?,
        ));

        for (node, neighbors) in graph.iter() {
            let page = NodePageBuilder::build(node, neighbors);
            let html = self.renderer.render_node_page(&page)?;
            files.push(SiteFile::new(node_page_file(&page.heading), html));
        }

        let payload = VisualizationDataBuilder::build(graph);
        files.push(SiteFile::new(
            VISUALIZATION_FILE,
            self.renderer.render_visualization(&payload)?,
        ));

        Ok(files)
    }

    /// Generate the site into `output`, replacing whatever it held
    ///
    /// Dangling neighbors and unknown starting nodes are logged as warnings and
    /// listed in the report; they still get links.
    ///
    /// # Errors
    /// Returns the first validation, rendering or I/O error. A failed run
    /// leaves the previous site in place.
    pub fn generate<N, O>(
        &self,
        graph: &GraphModel<N>,
        starting_nodes: &[N],
        output: &mut O,
    ) -> Result<GenerationReport>
    where
        N: NodeKey,
        O: SiteOutput + ?Sized,
    {
        info!(
            "Generating site for {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        let dangling_references: Vec<String> = graph
            .dangling_references()
            .into_iter()
            .map(NodeKey::canonical)
            .collect();
        for id in &dangling_references {
            warn!("Neighbor '{id}' has no node page; links to it will be broken");
        }

        let missing_starting_nodes: Vec<String> = starting_nodes
            .iter()
            .filter(|node| !graph.contains_node(node))
            .map(NodeKey::canonical)
            .collect();
        for id in &missing_starting_nodes {
            warn!("Starting node '{id}' has no node page; its index link will be broken");
        }

        let files = self.render(graph, starting_nodes)?;

        if let Err(err) = write_all(&files, output) {
            output.abort();
            return Err(err);
        }

        info!("Site written: {} files", files.len());

        Ok(GenerationReport {
            files: files.into_iter().map(|file| file.name).collect(),
            node_pages: graph.node_count(),
            link_records: graph.edge_count(),
            dangling_references,
            missing_starting_nodes,
        })
    }
}

fn write_all<O: SiteOutput + ?Sized>(files: &[SiteFile], output: &mut O) -> Result<()> {
    output.reset()?;
    for file in files {
        debug!("Writing {}", file.name);
        output.write(&file.name, &file.contents)?;
    }
    output.commit()
}

fn validate_keys<N: NodeKey>(graph: &GraphModel<N>) -> Result<()> {
    if let Some(id) = graph
        .nodes()
        .map(NodeKey::canonical)
        .find(|id| !is_valid_page_name(id))
    {
        return Err(SiteError::InvalidNodeId(id));
    }
    if let Some(id) = graph.canonical_collision() {
        return Err(SiteError::DuplicateCanonicalId(id));
    }
    Ok(())
}

/// A canonical id must not be empty or be able to escape the site directory
fn is_valid_page_name(id: &str) -> bool {
    !id.is_empty() && !id.contains(['/', '\\', '\0'])
}
