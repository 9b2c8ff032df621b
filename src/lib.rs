//! Template tags for blog themes: a library of helper functions that render
//! an entry's metadata (author, dates, categories, comment counts, reading
//! time, thumbnails, avatars, pagination) as HTML fragments.
//!
//! The library is built around one idea: the host that knows about content
//! (a site generator, a CMS adapter) resolves everything a fragment needs
//! up front into a [`meta::EntryMeta`] record, and the fragment renderers
//! in [`tags`] are pure functions from that record (plus a couple of
//! injected collaborators) to HTML text. The collaborators are:
//!
//! 1. An icon set ([`icons::IconSet`]) supplying inline SVG markup, since
//!    the icon subsystem belongs to the theme.
//! 2. A locale ([`l10n::Localize`]) supplying translated text and
//!    singular/plural message-template selection.
//! 3. A [`config::ThemeConfig`] with the presentation knobs (avatar size,
//!    reading speed, date format, pagination window, comment order).
//!
//! Defaults exist for all three, so `TagRenderer::new(&config)` with a
//! default config renders plain English fragments with no icons.
//!
//! The pieces with real logic are split out into their own modules so they
//! can be tested without any markup: [`timediff`] (the "N units ago"
//! formatter), [`readtime`] (markdown word counting), and [`navigation`]
//! (page-number windowing for the posts pagination).

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod config;
pub mod escape;
pub mod icons;
pub mod l10n;
pub mod meta;
pub mod navigation;
pub mod readtime;
pub mod tags;
pub mod timediff;
pub mod value;
