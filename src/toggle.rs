use crate::dom_tree::Node;
use crate::errors::Error;
use crate::Document;
use tendril::StrTendril;
use tracing::debug;

/// Id of the checkbox driving the listing.
const SHOW_ALL_ID: &str = "show_all";

/// Entries rendered only when every version is requested.
const OLD_CLASS: &str = "old";

/// Entries rendered only while the listing is collapsed.
const SWITCH_CLASS: &str = "switch";

/// Inline display state applied to toggled entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Display {
    /// Rendered as a list item.
    ListItem,
    /// Not rendered at all.
    None,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::ListItem => "list-item",
            Display::None => "none",
        }
    }
}

impl Document {
    /// Re-renders the collapsible groups from the current state of the
    /// `show_all` checkbox.
    ///
    /// Elements of class `old` become visible exactly when the box is
    /// checked; elements of class `switch` get the inverse treatment, so
    /// the two groups are always in complementary visibility. The call is
    /// idempotent for a fixed checkbox state.
    ///
    /// Fails with [`Error::ControlNotFound`] when the checkbox is missing;
    /// in that case nothing is mutated. Empty groups are a normal outcome.
    pub fn toggle_visibility(&self) -> Result<(), Error> {
        let checked = self.checkbox_checked(SHOW_ALL_ID)?;

        let (old, switch) = if checked {
            (Display::ListItem, Display::None)
        } else {
            (Display::None, Display::ListItem)
        };

        let old_count = self.set_display_by_class(OLD_CLASS, old);
        let switch_count = self.set_display_by_class(SWITCH_CLASS, switch);
        debug!(
            checked,
            old = old_count,
            switch = switch_count,
            "re-rendered collapsible groups"
        );

        Ok(())
    }

    // The checked state of the checkbox with the given id. In a parsed
    // document that state is the presence of the `checked` attribute.
    fn checkbox_checked(&self, id: &str) -> Result<bool, Error> {
        let control = self
            .element_by_id(id)
            .ok_or_else(|| Error::ControlNotFound(id.to_owned()))?;

        Ok(control.has_attr("checked"))
    }

    // First element carrying the given id, in document order.
    fn element_by_id(&self, id: &str) -> Option<Node> {
        self.root().descendants().into_iter().find(|node| {
            node.is_element() && node.attr("id").map_or(false, |value| &*value == id)
        })
    }

    fn set_display_by_class(&self, class_name: &str, display: Display) -> usize {
        let group = self.find_by_class(class_name);

        for node in group.nodes() {
            let style = node.attr("style").unwrap_or_else(StrTendril::new);
            node.set_attr("style", &with_display(&style, display));
        }

        group.length()
    }
}

/// Rewrites an inline style so its `display` declaration carries the given
/// value, leaving every other declaration in place.
fn with_display(style: &str, display: Display) -> String {
    let mut out = String::new();

    for decl in style.split(';') {
        let decl = decl.trim();
        if decl.is_empty() {
            continue;
        }
        let prop = decl.splitn(2, ':').next().unwrap_or("").trim();
        if prop.eq_ignore_ascii_case("display") {
            continue;
        }
        out.push_str(decl);
        out.push_str("; ");
    }

    out.push_str("display: ");
    out.push_str(display.as_css());
    out
}

#[cfg(test)]
mod tests {
    use super::{with_display, Display};

    #[test]
    fn sets_display_on_an_empty_style() {
        assert_eq!(with_display("", Display::None), "display: none");
    }

    #[test]
    fn replaces_an_existing_display_declaration() {
        assert_eq!(
            with_display("display: none", Display::ListItem),
            "display: list-item"
        );
        assert_eq!(
            with_display("DISPLAY : block", Display::None),
            "display: none"
        );
    }

    #[test]
    fn keeps_unrelated_declarations() {
        assert_eq!(
            with_display("color: grey; display: none", Display::ListItem),
            "color: grey; display: list-item"
        );
    }
}
