//! The `#[test]` attribute used across the prism crates.

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    // Attributes, visibility and qualifiers in front of `fn`
    struct UntilFn {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    // Arguments, return type and where clause
    struct UntilBody {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct Body {
        items: BraceGroup,
    }

    struct TestFn {
        until_fn: UntilFn, _fn: KFn, name: Ident,
        until_body: UntilBody, body: Body
    }
}

impl quote::ToTokens for UntilFn {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for UntilBody {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Body {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        tokens.extend(self.items.0.stream())
    }
}

/// Runs `prism_testhelpers::setup()` before the test body.
///
/// ```ignore
/// use prism_testhelpers::test;
///
/// #[test]
/// fn my_test() {
///     // tracing is set up automatically
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut tokens = item.to_token_iter();
    let TestFn {
        until_fn,
        _fn,
        name,
        until_body,
        body,
    } = match tokens.parse::<TestFn>() {
        Ok(test_fn) => test_fn,
        Err(err) => {
            let message = format!("#[prism_testhelpers::test] expects a function: {err:?}");
            return quote::quote! { ::core::compile_error!(#message); }.into();
        }
    };

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #until_fn fn #name #until_body {
            ::prism_testhelpers::setup();

            #body
        }
    }
    .into()
}
