// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The `#[exposed_model]` marker.
//!
//! Carries no behavior: arguments and applicability are checked by the
//! generator, which reads the attribute from source.

use proc_macro2::TokenStream;

/// Return the annotated item untouched.
pub fn expand(_args: TokenStream, item: TokenStream) -> TokenStream {
    item
}
