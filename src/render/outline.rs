use std::collections::HashMap;

use crate::value::PrimitiveValue;

use super::resolve::ResolvedNode;
use super::Renderer;

/// Line emitted for a component type with no formatter.
pub const UNSUPPORTED_PREFIX: &str = "Unsupported component:";

/// Formats the line of one component, without indentation or suffixes.
pub type Formatter = fn(&ResolvedNode) -> String;

/// Headless renderer producing an indented text outline.
///
/// Each component renders as one line, `<label> #<id>`, followed by the
/// events it reacts to; children are indented two spaces. Unknown types
/// render an `Unsupported component` line and their children are skipped.
pub struct OutlineRenderer {
    formatters: HashMap<String, Formatter>,
}

impl Default for OutlineRenderer {
    fn default() -> Self {
        let mut renderer = Self {
            formatters: HashMap::new(),
        };
        renderer.register("text", |node| quoted("Text", node, "text"));
        renderer.register("dynamicText", |node| quoted("Text", node, "value"));
        renderer.register("button", |node| quoted("Button", node, "text"));
        renderer.register("textInput", format_text_input);
        renderer.register("singleSelect", |node| format_select("SingleSelect", node));
        renderer.register("multiSelect", |node| format_select("MultiSelect", node));
        renderer.register("checkbox", format_checkbox);
        renderer.register("container", |_| "Container".to_string());
        renderer.register("column", |_| "Column".to_string());
        renderer.register("card", |_| "Card".to_string());
        renderer.register("shimmer", |_| "Shimmer".to_string());
        renderer
    }
}

impl std::fmt::Debug for OutlineRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.formatters.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("OutlineRenderer").field("kinds", &kinds).finish()
    }
}

impl OutlineRenderer {
    pub fn register(&mut self, kind: impl Into<String>, formatter: Formatter) {
        self.formatters.insert(kind.into(), formatter);
    }

    fn render_into(&self, node: &ResolvedNode, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        let Some(format) = self.formatters.get(&node.kind) else {
            out.push_str(&format!("{}{} {}\n", indent, UNSUPPORTED_PREFIX, node.kind));
            return;
        };

        out.push_str(&indent);
        out.push_str(&format(node));
        out.push_str(&format!(" #{}", node.id));
        if !node.events.is_empty() {
            out.push_str(&format!(" [{}]", node.events.join(", ")));
        }
        out.push('\n');

        for child in &node.children {
            self.render_into(child, depth + 1, out);
        }
    }
}

impl Renderer for OutlineRenderer {
    type View = String;

    fn render(&mut self, node: &ResolvedNode) -> String {
        let mut out = String::new();
        self.render_into(node, 0, &mut out);
        out
    }
}

fn display(node: &ResolvedNode, name: &str) -> String {
    node.property(name)
        .map(|resolution| resolution.to_string())
        .unwrap_or_default()
}

fn quoted(label: &str, node: &ResolvedNode, name: &str) -> String {
    format!("{} \"{}\"", label, display(node, name))
}

fn format_text_input(node: &ResolvedNode) -> String {
    format!("TextInput {}: \"{}\"", display(node, "label"), display(node, "value"))
}

fn format_checkbox(node: &ResolvedNode) -> String {
    let mark = match node.value("checked") {
        Some(PrimitiveValue::Boolean(true)) => "x",
        _ => " ",
    };
    format!("Checkbox [{}] {}", mark, display(node, "label"))
}

fn format_select(label: &str, node: &ResolvedNode) -> String {
    let options = node
        .value("options")
        .and_then(PrimitiveValue::as_list)
        .map(|options| {
            options
                .iter()
                .map(|option| option.to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .unwrap_or_default();
    format!("{} ({}) selected={}", label, options, display(node, "selected"))
}
