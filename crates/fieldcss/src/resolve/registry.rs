//! Field type → resolver lookup.
//!
//! # Resolution Order
//!
//! When looking up the resolver for a field:
//!
//! 1. A resolver registered for the field's config and type
//! 2. A resolver registered for the type alone
//! 3. The fallback resolver ([`ScalarResolver`] unless replaced)
//!
//! Falling through to step 3 is logged at debug level. Field types without a
//! dedicated resolver are common, but a misspelled type silently producing
//! scalar output is a classic source of missing CSS.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::debug;

use super::{DimensionsResolver, OutputResolver, ScalarResolver};

/// Field type handled by [`DimensionsResolver`] out of the box.
pub const DIMENSIONS_FIELD_TYPE: &str = "dimensions";

/// Mapping from field type to [`OutputResolver`], with a fixed fallback.
///
/// `ResolverRegistry` is cheap to clone since it stores resolvers as `Rc`.
///
/// # Example
///
/// ```rust
/// use fieldcss::{ResolverRegistry, ScalarResolver};
///
/// let mut registry = ResolverRegistry::new();
/// registry.register("color", ScalarResolver::with_default_property("color"));
/// registry.register_for_config("child-theme", "color",
///     ScalarResolver::with_default_property("background-color"));
///
/// assert!(registry.contains("dimensions"));
/// assert!(registry.contains("color"));
/// assert!(!registry.contains("slider"));
/// ```
#[derive(Clone)]
pub struct ResolverRegistry {
    by_type: HashMap<String, Rc<dyn OutputResolver>>,
    by_config: HashMap<String, HashMap<String, Rc<dyn OutputResolver>>>,
    fallback: Rc<dyn OutputResolver>,
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverRegistry {
    /// Creates a registry with the built-in resolvers.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(DIMENSIONS_FIELD_TYPE, DimensionsResolver);
        registry
    }

    /// Creates a registry where every field type uses the fallback.
    pub fn empty() -> Self {
        Self {
            by_type: HashMap::new(),
            by_config: HashMap::new(),
            fallback: Rc::new(ScalarResolver::new()),
        }
    }

    /// Registers a resolver for `field_type`, replacing any previous one.
    pub fn register<R: OutputResolver + 'static>(
        &mut self,
        field_type: impl Into<String>,
        resolver: R,
    ) {
        self.by_type.insert(field_type.into(), Rc::new(resolver));
    }

    /// Registers a resolver used only for fields belonging to `config`.
    ///
    /// Config-scoped resolvers take precedence over [`register`](Self::register).
    pub fn register_for_config<R: OutputResolver + 'static>(
        &mut self,
        config: impl Into<String>,
        field_type: impl Into<String>,
        resolver: R,
    ) {
        self.by_config
            .entry(config.into())
            .or_default()
            .insert(field_type.into(), Rc::new(resolver));
    }

    /// Replaces the resolver used for unregistered field types.
    pub fn set_fallback<R: OutputResolver + 'static>(&mut self, resolver: R) {
        self.fallback = Rc::new(resolver);
    }

    /// Returns true if `field_type` has a resolver outside any config scope.
    pub fn contains(&self, field_type: &str) -> bool {
        self.by_type.contains_key(field_type)
    }

    /// Returns the registered resolver for `field_type` in `config`, if any.
    ///
    /// Unlike [`lookup`](Self::lookup), this never returns the fallback.
    pub fn get(&self, field_type: &str, config: &str) -> Option<&dyn OutputResolver> {
        let scoped = self
            .by_config
            .get(config)
            .and_then(|resolvers| resolvers.get(field_type));

        scoped
            .or_else(|| self.by_type.get(field_type))
            .map(|resolver| resolver.as_ref())
    }

    /// The resolver used for unregistered field types.
    pub fn fallback(&self) -> &dyn OutputResolver {
        self.fallback.as_ref()
    }

    /// Returns the resolver for a field of `field_type` in `config`.
    pub fn lookup(&self, field_type: &str, config: &str) -> &dyn OutputResolver {
        match self.get(field_type, config) {
            Some(resolver) => resolver,
            None => {
                debug!(
                    "no resolver registered for field type '{}' (config '{}'); using fallback",
                    field_type, config
                );
                self.fallback()
            }
        }
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&str> = self.by_type.keys().map(String::as_str).collect();
        types.sort_unstable();
        let mut configs: Vec<&str> = self.by_config.keys().map(String::as_str).collect();
        configs.sort_unstable();
        f.debug_struct("ResolverRegistry")
            .field("types", &types)
            .field("configs", &configs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::ResolveContext;
    use crate::rule::OutputRule;
    use crate::style::{to_css, StyleMap};
    use crate::transform::TransformRegistry;
    use crate::value::FieldValue;

    /// Writes a fixed marker so tests can tell which resolver ran.
    struct Marker(&'static str);

    impl OutputResolver for Marker {
        fn resolve(&self, rules: &[OutputRule], _value: &FieldValue, ctx: &mut ResolveContext<'_>) {
            for rule in rules {
                ctx.write(rule, "content", self.0);
            }
        }
    }

    fn run(registry: &ResolverRegistry, field_type: &str, config: &str, value: FieldValue) -> String {
        let transforms = TransformRegistry::new();
        let mut styles = StyleMap::new();
        let rules = [OutputRule::new(".a").property("margin")];
        registry.lookup(field_type, config).resolve(
            &rules,
            &value,
            &mut ResolveContext::new(&mut styles, &transforms),
        );
        to_css(&styles)
    }

    #[test]
    fn test_builtin_dimensions() {
        let registry = ResolverRegistry::new();
        assert!(registry.contains(DIMENSIONS_FIELD_TYPE));

        let css = run(
            &registry,
            DIMENSIONS_FIELD_TYPE,
            "global",
            FieldValue::composite([("top", "1px")]),
        );
        assert_eq!(css, ".a{margin-top:1px;}");
    }

    #[test]
    fn test_unknown_type_uses_scalar_fallback() {
        let registry = ResolverRegistry::new();
        let css = run(&registry, "slider", "global", "5px".into());
        assert_eq!(css, ".a{margin:5px;}");
    }

    #[test]
    fn test_empty_registry_has_no_dimensions() {
        let registry = ResolverRegistry::empty();
        assert!(!registry.contains(DIMENSIONS_FIELD_TYPE));

        let css = run(
            &registry,
            DIMENSIONS_FIELD_TYPE,
            "global",
            FieldValue::composite([("top", "1px")]),
        );
        assert_eq!(css, "");
    }

    #[test]
    fn test_register_replaces_builtin() {
        let mut registry = ResolverRegistry::new();
        registry.register(DIMENSIONS_FIELD_TYPE, Marker("custom"));
        let css = run(&registry, DIMENSIONS_FIELD_TYPE, "global", "x".into());
        assert_eq!(css, ".a{content:custom;}");
    }

    #[test]
    fn test_config_scope_wins_only_for_its_config() {
        let mut registry = ResolverRegistry::new();
        registry.register("badge", Marker("global"));
        registry.register_for_config("shop", "badge", Marker("shop"));

        assert_eq!(run(&registry, "badge", "shop", "x".into()), ".a{content:shop;}");
        assert_eq!(run(&registry, "badge", "blog", "x".into()), ".a{content:global;}");
    }

    #[test]
    fn test_set_fallback() {
        let mut registry = ResolverRegistry::new();
        registry.set_fallback(Marker("fallback"));
        assert_eq!(run(&registry, "anything", "global", "x".into()), ".a{content:fallback;}");
    }

    #[test]
    fn test_get_skips_fallback() {
        let mut registry = ResolverRegistry::new();
        registry.register_for_config("shop", "badge", Marker("shop"));

        assert!(registry.get(DIMENSIONS_FIELD_TYPE, "global").is_some());
        assert!(registry.get("badge", "shop").is_some());
        assert!(registry.get("badge", "blog").is_none());
        assert!(registry.get("slider", "global").is_none());
    }

    #[test]
    fn test_debug_lists_types() {
        let mut registry = ResolverRegistry::new();
        registry.register_for_config("shop", "badge", Marker("shop"));
        let debug = format!("{:?}", registry);
        assert!(debug.contains("dimensions"));
        assert!(debug.contains("shop"));
    }
}
