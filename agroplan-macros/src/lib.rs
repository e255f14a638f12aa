//! Derive macros for agroplan-runtime

use std::collections::BTreeMap;

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use proc_macro2::Ident;
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    data: darling::ast::Data<ActionVariant, ()>,

    /// Infer categories from variant name prefixes
    #[darling(default)]
    infer_categories: bool,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,
    fields: darling::ast::Fields<()>,

    /// Explicit category override
    #[darling(default)]
    category: Option<String>,

    /// Exclude from category inference
    #[darling(default)]
    skip_category: bool,
}

// Words that end the subject part of a variant name. "Did" marks an async
// result: `ForecastDidLoad` belongs with `ForecastStart`.
const ACTION_VERBS: &[&str] = &[
    "Did", "Start", "End", "Open", "Close", "Submit", "Cancel", "Next", "Prev", "Up", "Down",
    "Left", "Right", "Enter", "Exit", "Add", "Remove", "Clear", "Update", "Set", "Load", "Save",
    "Show", "Hide", "Toggle", "Dismiss", "Focus", "Select", "Cycle", "Reset", "Scroll",
];

/// Split a PascalCase string into parts
fn split_pascal_case(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for ch in s.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Infer a category from a variant name
///
/// `LocationDidResolve` -> `location`, `TabNext` -> `tab`,
/// `DidConnect` -> `async_result`. Names that start with a verb or contain
/// none (`Quit`, `Tick`) stay uncategorized.
fn infer_category(name: &str) -> Option<String> {
    let parts = split_pascal_case(name);
    let first = parts.first()?;

    if first == "Did" {
        return Some("async_result".to_string());
    }
    if parts.len() < 2 || ACTION_VERBS.contains(&first.as_str()) {
        return None;
    }

    let prefix_end = parts
        .iter()
        .skip(1)
        .position(|part| ACTION_VERBS.contains(&part.as_str()))?
        + 1;

    Some(to_snake_case(&parts[..prefix_end].concat()))
}

/// Derive macro for the `Action` trait
///
/// Generates `name()` returning the variant name.
///
/// With `#[action(infer_categories)]`, also generates an inherent
/// `category()`, one `is_{category}()` predicate per discovered category,
/// and an `ActionCategory` impl.
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// #[action(infer_categories)]
/// enum Action {
///     ResolveStart,
///     LocationDidResolve(Coordinates),
///     #[action(category = "ui")]
///     Quit,
/// }
///
/// assert_eq!(Action::ResolveStart.name(), "ResolveStart");
/// assert_eq!(Action::ResolveStart.category(), Some("resolve"));
/// assert!(Action::Quit.is_ui());
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let name_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let variant_str = variant_name.to_string();

        match &v.fields.style {
            darling::ast::Style::Unit => quote! {
                #name::#variant_name => #variant_str
            },
            darling::ast::Style::Tuple => quote! {
                #name::#variant_name(..) => #variant_str
            },
            darling::ast::Style::Struct => quote! {
                #name::#variant_name { .. } => #variant_str
            },
        }
    });

    let mut expanded = quote! {
        impl ::agroplan_runtime::Action for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    };

    if opts.infer_categories {
        let mut categories: BTreeMap<String, Vec<&Ident>> = BTreeMap::new();
        let mut category_arms = Vec::new();

        for v in variants.iter() {
            let category = if v.skip_category {
                None
            } else if let Some(explicit) = &v.category {
                Some(explicit.clone())
            } else {
                infer_category(&v.ident.to_string())
            };

            let variant = &v.ident;
            let category_expr = match &category {
                Some(c) => quote! { ::core::option::Option::Some(#c) },
                None => quote! { ::core::option::Option::None },
            };
            category_arms.push(quote! { #name::#variant { .. } => #category_expr });

            if let Some(category) = category {
                categories.entry(category).or_default().push(variant);
            }
        }

        let predicates = categories.iter().map(|(category, members)| {
            let predicate_name = format_ident!("is_{}", category);
            let doc = format!(
                "Returns true if this action belongs to the `{}` category.",
                category
            );
            quote! {
                #[doc = #doc]
                pub fn #predicate_name(&self) -> bool {
                    matches!(self, #(#name::#members { .. })|*)
                }
            }
        });

        expanded = quote! {
            #expanded

            impl #name {
                /// Get the action's category (if categorized)
                pub fn category(&self) -> ::core::option::Option<&'static str> {
                    match self {
                        #(#category_arms,)*
                    }
                }

                #(#predicates)*
            }

            impl ::agroplan_runtime::ActionCategory for #name {
                fn category(&self) -> ::core::option::Option<&'static str> {
                    #name::category(self)
                }
            }
        };
    }

    expanded.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pascal_case() {
        assert_eq!(
            split_pascal_case("LocationDidResolve"),
            vec!["Location", "Did", "Resolve"]
        );
        assert_eq!(split_pascal_case("Quit"), vec!["Quit"]);
    }

    #[test]
    fn test_infer_category() {
        assert_eq!(infer_category("ResolveStart"), Some("resolve".into()));
        assert_eq!(infer_category("LocationDidResolve"), Some("location".into()));
        assert_eq!(infer_category("ForecastDidFail"), Some("forecast".into()));
        assert_eq!(infer_category("SelectionNext"), Some("selection".into()));
        assert_eq!(infer_category("NoticeDismiss"), Some("notice".into()));
        assert_eq!(infer_category("DidConnect"), Some("async_result".into()));
        assert_eq!(infer_category("Quit"), None);
        assert_eq!(infer_category("ToggleUnits"), None);
        assert_eq!(infer_category("FarmWeather"), None);
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("MarketHorizon"), "market_horizon");
    }
}
