use hopgraph_core::edge_list::parse_edge_text;
use hopgraph_core::format::OutputFormat;

/// Parse an edge given on the command line (`u,v`, `u v` or `u -> v`)
pub fn parse_edge_arg(s: &str) -> std::result::Result<(String, String), String> {
    parse_edge_text(s.trim())
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
