//! The generation pipeline: fields in, CSS out.
//!
//! A [`Generator`] owns everything that stays fixed between page renders: the
//! resolver and transform registries, the pre-serialization filter, and the
//! vendor prefix setting. Each render starts a fresh [`GenerationPass`], which
//! accumulates the declarations of every field into one [`StyleMap`]:
//!
//! ```text
//! Field ──resolve──▶ StyleMap ──filter──▶ add_prefixes ──▶ to_css ──▶ String
//!   ⋮                  ▲
//! Field ──resolve──────┘
//! ```
//!
//! Fields are resolved in the order they are added. A later field writing the
//! same media query, selector and property replaces the earlier value, which
//! lets customizations registered after the defaults override them.
//!
//! # Example
//!
//! ```rust
//! use fieldcss::{Field, FieldValue, Generator, OutputRule};
//!
//! let generator = Generator::new()
//!     .with_transform("font-size", |_: &str, v: &str| format!("{v}px"));
//!
//! let mut pass = generator.pass();
//! pass.add_field(&Field::new("body_size", "slider")
//!     .value("16")
//!     .rule(OutputRule::new("body").property("font-size")));
//! pass.add_field(&Field::new("card_radius", "slider")
//!     .value("4px")
//!     .rule(OutputRule::new(".card").property("border-radius")));
//!
//! assert_eq!(
//!     pass.finish(),
//!     "body{font-size:16px;}\
//!      .card{-webkit-border-radius:4px;-moz-border-radius:4px;border-radius:4px;}"
//! );
//! ```

use std::fmt;
use std::rc::Rc;

use log::{debug, trace};

use crate::config::GeneratorConfig;
use crate::field::Field;
use crate::resolve::{OutputResolver, ResolveContext, ResolverRegistry, ScalarResolver};
use crate::style::{add_prefixes, to_css, StyleMap};
use crate::transform::{TransformRegistry, ValueTransform};

/// Hook that may rewrite the accumulated styles before serialization.
///
/// Closures `Fn(StyleMap) -> StyleMap` implement this trait.
pub trait StylesFilter {
    fn filter(&self, styles: StyleMap) -> StyleMap;
}

impl<F> StylesFilter for F
where
    F: Fn(StyleMap) -> StyleMap,
{
    fn filter(&self, styles: StyleMap) -> StyleMap {
        (self)(styles)
    }
}

/// Resolves fields into CSS using registered resolvers, transforms and hooks.
#[derive(Clone)]
pub struct Generator {
    resolvers: ResolverRegistry,
    transforms: TransformRegistry,
    filter: Option<Rc<dyn StylesFilter>>,
    vendor_prefixes: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Creates a generator with the built-in resolvers, no transforms, no
    /// filter and vendor prefixes enabled.
    pub fn new() -> Self {
        Self {
            resolvers: ResolverRegistry::new(),
            transforms: TransformRegistry::new(),
            filter: None,
            vendor_prefixes: true,
        }
    }

    /// Creates a generator from loaded configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut generator = Self::new().with_vendor_prefixes(config.vendor_prefixes);
        for (field_type, property) in &config.default_properties {
            generator.resolvers.register(
                field_type.as_str(),
                ScalarResolver::with_default_property(property.as_str()),
            );
        }
        generator
    }

    /// Registers a resolver for `field_type`, returning `self` for chaining.
    pub fn with_resolver<R: OutputResolver + 'static>(
        mut self,
        field_type: impl Into<String>,
        resolver: R,
    ) -> Self {
        self.resolvers.register(field_type, resolver);
        self
    }

    /// Registers a resolver for `field_type` within `config` only.
    pub fn with_config_resolver<R: OutputResolver + 'static>(
        mut self,
        config: impl Into<String>,
        field_type: impl Into<String>,
        resolver: R,
    ) -> Self {
        self.resolvers.register_for_config(config, field_type, resolver);
        self
    }

    /// Registers a value transform for `property`, returning `self` for chaining.
    pub fn with_transform<T: ValueTransform + 'static>(
        mut self,
        property: impl Into<String>,
        transform: T,
    ) -> Self {
        self.transforms.register(property, transform);
        self
    }

    /// Installs the pre-serialization filter, replacing any previous one.
    pub fn with_filter<F: StylesFilter + 'static>(mut self, filter: F) -> Self {
        self.filter = Some(Rc::new(filter));
        self
    }

    /// Enables or disables vendor prefix expansion.
    pub fn with_vendor_prefixes(mut self, enabled: bool) -> Self {
        self.vendor_prefixes = enabled;
        self
    }

    pub fn resolvers(&self) -> &ResolverRegistry {
        &self.resolvers
    }

    pub fn resolvers_mut(&mut self) -> &mut ResolverRegistry {
        &mut self.resolvers
    }

    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    pub fn transforms_mut(&mut self) -> &mut TransformRegistry {
        &mut self.transforms
    }

    pub fn vendor_prefixes(&self) -> bool {
        self.vendor_prefixes
    }

    /// Starts a generation pass with an empty style map.
    pub fn pass(&self) -> GenerationPass<'_> {
        GenerationPass {
            generator: self,
            styles: StyleMap::new(),
            fields: 0,
        }
    }

    /// Resolves `fields` in order and returns the finished CSS.
    pub fn generate<'f, I>(&self, fields: I) -> String
    where
        I: IntoIterator<Item = &'f Field>,
    {
        let mut pass = self.pass();
        pass.add_fields(fields);
        pass.finish()
    }

    /// Resolves a single field into `styles`.
    pub fn resolve_field(&self, field: &Field, styles: &mut StyleMap) {
        let field_type = field.effective_type();
        let resolver = match self.resolvers.get(field_type, &field.config) {
            Some(resolver) => resolver,
            None => {
                debug!(
                    "field '{}': no resolver for type '{}' (config '{}'); using fallback",
                    field.settings, field_type, field.config
                );
                self.resolvers.fallback()
            }
        };
        let rules = field.rules();
        let mut ctx = ResolveContext::new(styles, &self.transforms);
        resolver.resolve(&rules, &field.value, &mut ctx);
    }

    /// Serializes a style map, adding vendor prefixes if enabled.
    ///
    /// The filter is not applied here. Use this for maps merged from several
    /// passes via [`GenerationPass::into_styles`].
    pub fn render(&self, styles: StyleMap) -> String {
        let styles = if self.vendor_prefixes {
            add_prefixes(styles)
        } else {
            styles
        };
        to_css(&styles)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("resolvers", &self.resolvers)
            .field("transforms", &self.transforms)
            .field("filter", &self.filter.is_some())
            .field("vendor_prefixes", &self.vendor_prefixes)
            .finish()
    }
}

/// One style generation run: accumulates declarations from many fields.
///
/// Build one per render and discard it after [`finish`](Self::finish) or
/// [`into_styles`](Self::into_styles).
pub struct GenerationPass<'g> {
    generator: &'g Generator,
    styles: StyleMap,
    fields: usize,
}

impl<'g> GenerationPass<'g> {
    /// Resolves one field into the pass.
    pub fn add_field(&mut self, field: &Field) {
        self.generator.resolve_field(field, &mut self.styles);
        self.fields += 1;
    }

    /// Resolves fields in iteration order.
    pub fn add_fields<'f, I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = &'f Field>,
    {
        for field in fields {
            self.add_field(field);
        }
    }

    /// The declarations accumulated so far, before filtering.
    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    /// Number of fields resolved so far.
    pub fn field_count(&self) -> usize {
        self.fields
    }

    /// Ends the pass and returns the filtered style map.
    pub fn into_styles(self) -> StyleMap {
        trace!(
            "generation pass finished: {} field(s), {} declaration(s)",
            self.fields,
            self.styles.len()
        );
        match &self.generator.filter {
            Some(filter) => filter.filter(self.styles),
            None => self.styles,
        }
    }

    /// Ends the pass: filter, vendor prefixes, then serialization.
    pub fn finish(self) -> String {
        let generator = self.generator;
        generator.render(self.into_styles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldSet;
    use crate::rule::{OutputRule, GLOBAL_MEDIA_QUERY};
    use crate::style::StyleValue;
    use crate::value::FieldValue;
    use std::cell::Cell;

    fn color(settings: &str, selector: &str, value: &str) -> Field {
        Field::new(settings, "color")
            .value(value)
            .rule(OutputRule::new(selector).property("color"))
    }

    #[test]
    fn test_empty_pass_is_empty_css() {
        let generator = Generator::new();
        assert_eq!(generator.pass().finish(), "");
    }

    #[test]
    fn test_later_field_overwrites_earlier() {
        let generator = Generator::new();
        let fields = [color("a", "body", "red"), color("b", "body", "blue")];
        assert_eq!(generator.generate(&fields), "body{color:blue;}");
    }

    #[test]
    fn test_dimensions_field_dispatch() {
        let field = Field::new("spacing", "dimensions")
            .value(FieldValue::composite([("top", "1"), ("right", "2"), ("bottom", "3"), ("left", "4")]))
            .rule(OutputRule::new(".a").property("margin"));

        assert_eq!(
            Generator::new().generate([&field]),
            ".a{margin-top:1;margin-right:2;margin-bottom:3;margin-left:4;}"
        );
    }

    #[test]
    fn test_parent_type_selects_resolver() {
        let field = Field::new("spacing", "spacing")
            .parent_type("dimensions")
            .value(FieldValue::composite([("top", "1px")]))
            .rule(OutputRule::new(".a").property("padding"));

        assert_eq!(Generator::new().generate([&field]), ".a{padding-top:1px;}");
    }

    #[test]
    fn test_unknown_type_falls_back_to_scalar() {
        let field = Field::new("x", "mystery")
            .value("1px")
            .rule(OutputRule::new(".a").property("outline-width"));
        assert_eq!(Generator::new().generate([&field]), ".a{outline-width:1px;}");
    }

    #[test]
    fn test_vendor_prefixes_toggle() {
        let field = Field::new("x", "text")
            .value("rotate(1deg)")
            .rule(OutputRule::new(".a").property("transform"));

        let plain = Generator::new().with_vendor_prefixes(false);
        assert_eq!(plain.generate([&field]), ".a{transform:rotate(1deg);}");

        let prefixed = Generator::new();
        assert!(prefixed.generate([&field]).starts_with(".a{-webkit-transform:"));
    }

    #[test]
    fn test_filter_runs_once_and_can_replace_map() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let generator = Generator::new().with_filter(move |mut styles: StyleMap| {
            seen.set(seen.get() + 1);
            styles.set(GLOBAL_MEDIA_QUERY, "html", "scroll-behavior", "smooth");
            styles
        });

        let css = generator.generate([&color("a", "body", "red")]);
        assert_eq!(css, "body{color:red;}html{scroll-behavior:smooth;}");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_filter_runs_before_prefixes() {
        let generator = Generator::new().with_filter(|mut styles: StyleMap| {
            styles.set(GLOBAL_MEDIA_QUERY, ".a", "box-sizing", "border-box");
            styles
        });
        assert_eq!(
            generator.pass().finish(),
            ".a{-webkit-box-sizing:border-box;-moz-box-sizing:border-box;box-sizing:border-box;}"
        );
    }

    #[test]
    fn test_into_styles_applies_filter() {
        let generator = Generator::new().with_filter(|_: StyleMap| StyleMap::new());
        let mut pass = generator.pass();
        pass.add_field(&color("a", "body", "red"));
        assert_eq!(pass.styles().len(), 1);
        assert_eq!(pass.field_count(), 1);
        assert!(pass.into_styles().is_empty());
    }

    #[test]
    fn test_render_merged_passes() {
        let generator = Generator::new();

        let mut first = generator.pass();
        first.add_field(&color("a", "body", "red"));
        let mut styles = first.into_styles();

        let mut second = generator.pass();
        second.add_field(&color("b", "body", "blue"));
        second.add_field(&color("c", "h1", "green"));
        styles.merge(second.into_styles());

        assert_eq!(generator.render(styles), "body{color:blue;}h1{color:green;}");
    }

    #[test]
    fn test_transform_applies_to_fields() {
        let generator = Generator::new().with_transform("width", |_: &str, v: &str| format!("{v}%"));
        let field = Field::new("w", "slider")
            .value("50")
            .rule(OutputRule::new(".col").property("width"));

        let mut pass = generator.pass();
        pass.add_field(&field);
        assert_eq!(
            pass.styles().get(GLOBAL_MEDIA_QUERY, ".col", "width"),
            Some(&StyleValue::from("50%"))
        );
    }

    #[test]
    fn test_from_config_default_properties() {
        let config = GeneratorConfig::from_yaml(
            r#"
            vendor_prefixes: false
            default_properties:
              color: color
            "#,
        )
        .unwrap();
        let generator = Generator::from_config(&config);
        assert!(!generator.vendor_prefixes());
        assert!(generator.resolvers().contains("color"));

        let fields = FieldSet::from_yaml(
            r#"
            link:
              type: color
              value: "red"
              output: a
            "#,
        )
        .unwrap();
        assert_eq!(generator.generate(&fields), "a{color:red;}");
    }

    #[test]
    fn test_config_scoped_resolver() {
        let generator = Generator::new().with_config_resolver(
            "shop",
            "color",
            ScalarResolver::with_default_property("background-color"),
        );

        let shop = Field::new("a", "color").value("red").output(".btn").config("shop");
        let blog = Field::new("b", "color").value("red").output(".btn");

        assert_eq!(generator.generate([&shop]), ".btn{background-color:red;}");
        assert_eq!(generator.generate([&blog]), "");
    }

    #[test]
    fn test_debug_output() {
        let generator = Generator::new().with_filter(|s: StyleMap| s);
        let debug = format!("{:?}", generator);
        assert!(debug.contains("filter: true"));
        assert!(debug.contains("vendor_prefixes: true"));
    }
}
