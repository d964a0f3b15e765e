// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Fluent bundles are embedded at build time from `assets/i18n/`. The active
//! locale comes from the `--lang` flag, then `[general] language` in the
//! config file, then the OS locale, then `en-US`. Keys missing from the active
//! bundle fall back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
