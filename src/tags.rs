//! The template tags themselves: each method on [`TagRenderer`] writes one
//! HTML fragment for an entry's metadata into any [`fmt::Write`]. The
//! renderer holds the injected collaborators (icon set, locale, theme
//! configuration); everything else comes in through the resolved
//! [`EntryMeta`] record, so the fragments are pure functions of their
//! arguments.

use crate::config::{CommentOrder, ThemeConfig};
use crate::escape::{EscapeAttr, EscapeHtml};
use crate::icons::{IconSet, NoIcons};
use crate::l10n::{sprintf, DefaultLocale, Localize};
use crate::meta::{EntryKind, EntryMeta};
use crate::navigation::{page_href, page_numbers, PageItem};
use crate::readtime::estimated_reading_time;
use std::fmt;
use url::Url;

/// Whether the fragment is being rendered on a single-entry page or on an
/// index of entries. A few fragments change shape between the two: the
/// thumbnail links back to the entry on index views, and the comment count
/// only appears in the footer on index views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Single,
    Index,
}

/// Renders entry-metadata fragments. Construct with [`TagRenderer::new`]
/// for the default (iconless, English) collaborators, or build the struct
/// directly to inject others.
pub struct TagRenderer<'a> {
    pub icons: &'a dyn IconSet,
    pub locale: &'a dyn Localize,
    pub config: &'a ThemeConfig,
}

impl<'a> TagRenderer<'a> {
    pub fn new(config: &'a ThemeConfig) -> TagRenderer<'a> {
        TagRenderer {
            icons: &NoIcons,
            locale: &DefaultLocale,
            config,
        }
    }

    /// Writes the post-date fragment: the published time wrapped in a
    /// bookmark link, plus a second `<time>` for the modified date when the
    /// entry has been updated since publication.
    pub fn posted_on<W: fmt::Write>(&self, w: &mut W, meta: &EntryMeta) -> fmt::Result {
        let updated = meta.modified() != meta.published;
        write!(
            w,
            r#"<span class="posted-on"><a href="{}" rel="bookmark">"#,
            EscapeAttr(meta.permalink.as_str()),
        )?;
        write!(
            w,
            r#"<time class="entry-date published{}" datetime="{}">{}</time>"#,
            if updated { "" } else { " updated" },
            EscapeAttr(&meta.published.to_rfc3339()),
            EscapeHtml(&self.display_date(meta, false)),
        )?;
        if updated {
            write!(
                w,
                r#"<time class="updated" datetime="{}">{}</time>"#,
                EscapeAttr(&meta.modified().to_rfc3339()),
                EscapeHtml(&self.display_date(meta, true)),
            )?;
        }
        w.write_str("</a></span>")
    }

    /// Writes the byline: person icon, screen-reader label, and the author's
    /// name linked to their archive page.
    pub fn posted_by<W: fmt::Write>(&self, w: &mut W, meta: &EntryMeta) -> fmt::Result {
        write!(
            w,
            r#"<span class="byline">{}<span class="screen-reader-text">{}</span><span class="author vcard"><a class="url fn n" href="{}">{}</a></span></span>"#,
            self.icons.icon("person", 16),
            self.locale.text("Posted by"),
            EscapeAttr(meta.author.url.as_str()),
            EscapeHtml(&meta.author.name),
        )
    }

    /// Writes the comment-count fragment. Nothing is rendered for
    /// password-protected entries, or when comments are closed and none
    /// exist. With no comments yet the link invites one and targets the
    /// reply form; otherwise it counts them and targets the comment list.
    pub fn comment_count<W: fmt::Write>(&self, w: &mut W, meta: &EntryMeta) -> fmt::Result {
        if meta.password_required || (!meta.comments_open && meta.comment_count == 0) {
            return Ok(());
        }
        w.write_str(r#"<span class="comments-link">"#)?;
        w.write_str(&self.icons.icon("comment", 16))?;
        if meta.comment_count == 0 {
            write!(
                w,
                r##"<a href="{}#respond">{}</a>"##,
                EscapeAttr(meta.permalink.as_str()),
                /* translators: %s: name of current entry, only visible to screen readers */
                sprintf(
                    &self.locale.text(
                        r#"Leave a comment<span class="screen-reader-text"> on %s</span>"#,
                    ),
                    &EscapeHtml(&meta.title).to_string(),
                ),
            )?;
        } else {
            write!(
                w,
                r##"<a href="{}#comments">{}</a>"##,
                EscapeAttr(meta.permalink.as_str()),
                sprintf(
                    &self
                        .locale
                        .plural("%s Comment", "%s Comments", meta.comment_count),
                    &meta.comment_count.to_string(),
                ),
            )?;
        }
        w.write_str("</span>")
    }

    /// Writes the estimated reading time. Renders nothing when the estimate
    /// rounds down to zero minutes.
    pub fn estimated_read_time<W: fmt::Write>(&self, w: &mut W, meta: &EntryMeta) -> fmt::Result {
        let minutes = estimated_reading_time(&meta.body, self.config.words_per_minute);
        if minutes == 0 {
            return Ok(());
        }
        write!(
            w,
            r#"<span class="est-reading-time">{}<span class="screen-reader-text">{}</span><time datetime="{}m 0s">{}</time></span>"#,
            self.icons.icon("watch", 16),
            self.locale.text("Estimated reading time"),
            minutes,
            sprintf(
                &self.locale.plural("%s Minute", "%s Minutes", minutes),
                &minutes.to_string(),
            ),
        )
    }

    /// Writes the footer meta block: byline, category links (posts only),
    /// comment count (index views only), and the edit link when the caller
    /// has edit rights.
    pub fn entry_footer<W: fmt::Write>(
        &self,
        w: &mut W,
        meta: &EntryMeta,
        view: View,
    ) -> fmt::Result {
        self.posted_by(w, meta)?;

        // Hide category text for pages.
        if meta.kind == EntryKind::Post && !meta.categories.is_empty() {
            write!(
                w,
                r#"<span class="cat-links">{}<span class="screen-reader-text">{}</span>"#,
                self.icons.icon("archive", 16),
                self.locale.text("Posted in"),
            )?;
            for (i, category) in meta.categories.iter().enumerate() {
                if i > 0 {
                    /* translators: used between list items, there is a space
                     * after the comma */
                    w.write_str(&self.locale.text(", "))?;
                }
                write!(
                    w,
                    r#"<a href="{}" rel="category">{}</a>"#,
                    EscapeAttr(category.url.as_str()),
                    EscapeHtml(&category.name),
                )?;
            }
            w.write_str("</span>")?;
        }

        if view == View::Index {
            self.comment_count(w, meta)?;
        }

        if let Some(edit_url) = &meta.edit_url {
            write!(
                w,
                r#"<span class="edit-link">{}<a class="post-edit-link" href="{}">{}</a></span>"#,
                self.icons.icon("edit", 16),
                EscapeAttr(edit_url.as_str()),
                sprintf(
                    &self
                        .locale
                        .text(r#"Edit <span class="screen-reader-text">%s</span>"#),
                    &EscapeHtml(&meta.title).to_string(),
                ),
            )?;
        }
        Ok(())
    }

    /// Writes the optional entry thumbnail. The thumbnail is wrapped in a
    /// plain figure on single views, or in an anchor back to the entry
    /// (with the image doubling as the link's background) on index views.
    pub fn post_thumbnail<W: fmt::Write>(
        &self,
        w: &mut W,
        meta: &EntryMeta,
        view: View,
    ) -> fmt::Result {
        let thumbnail = match &meta.thumbnail {
            None => return Ok(()),
            Some(url) => url,
        };
        match view {
            View::Single => write!(
                w,
                r#"<figure class="post-thumbnail"><img src="{}" alt="" /></figure><!-- .post-thumbnail -->"#,
                EscapeAttr(thumbnail.as_str()),
            ),
            View::Index => write!(
                w,
                r#"<figure class="post-thumbnail"><a class="post-thumbnail-inner" href="{}" aria-hidden="true" tabindex="-1" style="background-image: url({});"><img src="{}" alt="{}" /></a></figure>"#,
                EscapeAttr(meta.permalink.as_str()),
                EscapeAttr(thumbnail.as_str()),
                EscapeAttr(thumbnail.as_str()),
                EscapeAttr(&meta.title),
            ),
        }
    }

    /// Returns the CSS rule for the header featured-image background, or an
    /// empty string for entries without a thumbnail.
    pub fn header_featured_image_css(&self, meta: &EntryMeta) -> String {
        match &meta.thumbnail {
            None => String::new(),
            Some(url) => format!(
                "body.singular .site-header.featured-image .site-branding-container:before {{ background-image: url({}); }}",
                url,
            ),
        }
    }

    /// Writes the avatar markup for a single user at the configured size.
    pub fn user_avatar_markup<W: fmt::Write>(&self, w: &mut W, avatar_url: &Url) -> fmt::Result {
        write!(
            w,
            r#"<div class="comment-user-avatar comment-author vcard"><img src="{}" class="avatar avatar-{size} photo" height="{size}" width="{size}" alt="" /></div>"#,
            EscapeAttr(avatar_url.as_str()),
            size = self.config.avatar_size,
        )
    }

    /// Writes a list of the avatars involved in an entry's discussion.
    /// Renders nothing for an empty list.
    pub fn discussion_avatars_list<W: fmt::Write>(
        &self,
        w: &mut W,
        avatar_urls: &[Url],
    ) -> fmt::Result {
        if avatar_urls.is_empty() {
            return Ok(());
        }
        w.write_str(r#"<ol class="discussion-avatar-list">"#)?;
        for url in avatar_urls {
            w.write_str("\n<li>")?;
            self.user_avatar_markup(w, url)?;
            w.write_str("</li>")?;
        }
        w.write_str("\n</ol><!-- .discussion-avatar-list -->")
    }

    /// The comment-order gate for the reply form: a theme renders the form
    /// in the requested position only when that position matches the
    /// configured comment order. `None` forces the form regardless.
    pub fn comment_form_allowed(&self, order: Option<CommentOrder>) -> bool {
        match order {
            None => true,
            Some(order) => order == self.config.comment_order,
        }
    }

    /// Writes the paginated posts navigation for an index: Older/Newer
    /// chevron links around a page-number strip windowed by
    /// [`page_numbers`]. Renders nothing when there is a single page.
    pub fn posts_navigation<W: fmt::Write>(
        &self,
        w: &mut W,
        index_base_url: &Url,
        current: usize,
        total: usize,
    ) -> fmt::Result {
        if total < 2 {
            return Ok(());
        }
        write!(
            w,
            r#"<nav class="navigation pagination" role="navigation" aria-label="{}"><h2 class="screen-reader-text">{}</h2><div class="nav-links">"#,
            self.locale.text("Posts"),
            self.locale.text("Posts navigation"),
        )?;
        if current > 1 {
            write!(
                w,
                r#"<a class="prev page-numbers" href="{}">{} <span class="nav-prev-text">{}</span></a>"#,
                EscapeAttr(&page_href(index_base_url, current - 1)),
                self.icons.icon("chevron_left", 22),
                self.locale.text("Older posts"),
            )?;
        }
        for item in page_numbers(current, total, 1, self.config.pagination_mid_size) {
            match item {
                PageItem::Number(n) if n == current => write!(
                    w,
                    r#"<span aria-current="page" class="page-numbers current">{}</span>"#,
                    n,
                )?,
                PageItem::Number(n) => write!(
                    w,
                    r#"<a class="page-numbers" href="{}">{}</a>"#,
                    EscapeAttr(&page_href(index_base_url, n)),
                    n,
                )?,
                PageItem::Dots => {
                    w.write_str(r#"<span class="page-numbers dots">&hellip;</span>"#)?
                }
            }
        }
        if current < total {
            write!(
                w,
                r#"<a class="next page-numbers" href="{}"><span class="nav-next-text">{}</span> {}</a>"#,
                EscapeAttr(&page_href(index_base_url, current + 1)),
                self.locale.text("Newer posts"),
                self.icons.icon("chevron_right", 22),
            )?;
        }
        w.write_str("</div></nav>")
    }

    fn display_date(&self, meta: &EntryMeta, modified: bool) -> String {
        let date = match modified {
            true => meta.modified(),
            false => meta.published,
        };
        date.format(&self.config.date_format).to_string()
    }
}
