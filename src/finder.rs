use crate::dom_tree::Node;
use crate::matcher::Matcher;
use crate::selection::Selection;
use crate::Document;
use regex::Regex;
use tracing::trace;

impl Document {
    /// Returns every element under the document root whose `class`
    /// attribute contains `class_name` as a whole whitespace-delimited
    /// token, in document order.
    ///
    /// Lookups go through the compiled selector engine whenever the name is
    /// expressible as a CSS class selector; class tokens that are valid
    /// HTML but not valid CSS (a leading digit, an embedded colon, ...)
    /// are handled by a manual scan over the tree with the same
    /// whole-token semantics.
    pub fn find_by_class(&self, class_name: &str) -> Selection {
        let root = [self.root()];
        Selection {
            nodes: find_under(&root, class_name),
        }
    }
}

impl<'a> Selection<'a> {
    /// Like [`Document::find_by_class`], scoped to the descendants of
    /// every node in this selection.
    pub fn find_by_class(&self, class_name: &str) -> Selection<'a> {
        Selection {
            nodes: find_under(self.nodes(), class_name),
        }
    }
}

fn find_under<'a>(roots: &[Node<'a>], class_name: &str) -> Vec<Node<'a>> {
    if !class_name.is_empty() && !class_name.contains(char::is_whitespace) {
        let css = format!(".{}", class_name);
        if let Some(matcher) = Matcher::new(&css).ok() {
            return roots
                .iter()
                .flat_map(|root| root.descendants())
                .filter(|node| node.is_element() && matcher.match_element(node))
                .collect();
        }
    }

    trace!(class = class_name, "class not expressible as a selector, scanning");
    scan(roots, class_name)
}

// The linear fallback: walk every descendant element and test its class
// attribute against a boundary-aware pattern, so `old` never matches an
// element whose only class is `oldest`.
fn scan<'a>(roots: &[Node<'a>], class_name: &str) -> Vec<Node<'a>> {
    let pattern = token_pattern(class_name);

    roots
        .iter()
        .flat_map(|root| root.descendants())
        .filter(|node| node.is_element())
        .filter(|node| {
            node.attr("class")
                .map_or(false, |classes| pattern.is_match(&classes))
        })
        .collect()
}

fn token_pattern(class_name: &str) -> Regex {
    Regex::new(&format!(r"(^|\s){}(\s|$)", regex::escape(class_name))).unwrap()
}

#[cfg(test)]
mod tests {
    use super::token_pattern;

    #[test]
    fn token_pattern_is_boundary_aware() {
        let pattern = token_pattern("old");

        assert!(pattern.is_match("old"));
        assert!(pattern.is_match("release old beta"));
        assert!(!pattern.is_match("oldest"));
        assert!(!pattern.is_match("bold"));
    }

    #[test]
    fn token_pattern_escapes_metacharacters() {
        let pattern = token_pattern("v1.2");

        assert!(pattern.is_match("v1.2"));
        assert!(!pattern.is_match("v1x2"));
    }
}
