use cssparser::{Parser as CssParser, ParseError, ParserInput, ToCss};
use html5ever::{LocalName, Namespace};
use selectors::matching::{matches_selector_list, MatchingContext, MatchingMode, QuirksMode};
use selectors::parser::{self, SelectorList, SelectorParseErrorKind};
use std::fmt;

/// A compiled CSS selector list, the bulk-query engine behind
/// [`crate::Document::select`].
#[derive(Clone)]
pub(crate) struct Matcher {
    selectors: SelectorList<InnerSelector>,
}

impl Matcher {
    pub(crate) fn new<'i>(
        sel: &'i str,
    ) -> Result<Self, ParseError<'i, SelectorParseErrorKind<'i>>> {
        let mut input = ParserInput::new(sel);
        let mut parser = CssParser::new(&mut input);
        SelectorList::parse(&InnerSelectorParser, &mut parser)
            .map(|selectors| Matcher { selectors })
    }

    pub(crate) fn match_element<E>(&self, element: &E) -> bool
    where
        E: selectors::Element<Impl = InnerSelector>,
    {
        let mut ctx =
            MatchingContext::new(MatchingMode::Normal, None, None, QuirksMode::NoQuirks);
        matches_selector_list(&self.selectors, element, &mut ctx)
    }
}

pub(crate) struct InnerSelectorParser;

impl<'i> parser::Parser<'i> for InnerSelectorParser {
    type Impl = InnerSelector;
    type Error = SelectorParseErrorKind<'i>;
}

#[derive(Debug, Clone)]
pub struct InnerSelector;

impl parser::SelectorImpl for InnerSelector {
    type ExtraMatchingData = String;
    type AttrValue = String;
    type Identifier = LocalName;
    type ClassName = LocalName;
    type PartName = LocalName;
    type LocalName = LocalName;
    type NamespaceUrl = Namespace;
    type NamespacePrefix = LocalName;
    type BorrowedLocalName = LocalName;
    type BorrowedNamespaceUrl = Namespace;

    type NonTSPseudoClass = NonTSPseudoClass;
    type PseudoElement = PseudoElement;
}

#[derive(Clone, Eq, PartialEq)]
pub struct NonTSPseudoClass;

impl parser::NonTSPseudoClass for NonTSPseudoClass {
    type Impl = InnerSelector;

    fn is_active_or_hover(&self) -> bool {
        false
    }

    fn is_user_action_state(&self) -> bool {
        false
    }

    fn has_zero_specificity(&self) -> bool {
        false
    }
}

impl ToCss for NonTSPseudoClass {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        dest.write_str("")
    }
}

#[derive(Clone, Eq, PartialEq)]
pub struct PseudoElement;

impl parser::PseudoElement for PseudoElement {
    type Impl = InnerSelector;
}

impl ToCss for PseudoElement {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        dest.write_str("")
    }
}
