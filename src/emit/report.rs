use crate::graph::DependencyGraph;

/// Markdown listing of what each file requires and what requires it.
/// Files with no edges either way are left out.
pub fn generate_report(graph: &DependencyGraph) -> String {
    let mut output = format!(
        "# dependencies\n\n{} files, {} edges\n\n",
        graph.len(),
        graph.edge_count()
    );

    let dependents = graph.dependents();
    let linked = graph.ids().filter(|id| {
        !graph.node(*id).dependencies().is_empty() || !dependents[id.index()].is_empty()
    });

    let mut any = false;
    for id in linked {
        any = true;
        let node = graph.node(id);
        output.push_str(&format!("## `{}`\n\n", node.name()));
        output.push_str(&field(
            "Requires",
            &graph.names(node.dependencies()),
            "none - root",
        ));
        output.push_str(&field(
            "Required by",
            &graph.names(&dependents[id.index()]),
            "none",
        ));
    }

    if !any {
        output.push_str("*No dependency relationships detected.*\n");
    }

    output
}

fn field(label: &str, names: &[String], when_empty: &str) -> String {
    if names.is_empty() {
        format!("**{}:** ({})\n\n", label, when_empty)
    } else {
        format!("**{}:** {}\n\n", label, names.join(", "))
    }
}
