// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image carousel state.
//!
//! [`Feed`] keeps the current index into a fixed list of image URLs, renders
//! the `NN / NN` counter, and decides which source to show once a preload
//! finishes: the requested URL on success, the local fallback on failure.
//! The preload itself is a browser concern; it reports back with a
//! [`LoadOutcome`].

use alloc::format;
use alloc::string::String;

/// Images shown by the landing page feed, in display order.
pub const FEED_IMAGES: [&str; 5] = [
    "https://res.cloudinary.com/duynyjs6q/image/upload/v1758120403/IMG_5575_3_k4cbrk.jpg",
    "https://res.cloudinary.com/duynyjs6q/image/upload/v1758118683/IMG_5577_do1jla.jpg",
    "https://res.cloudinary.com/duynyjs6q/image/upload/v1758118228/IMG_5580_ozbxwx.jpg",
    "https://res.cloudinary.com/duynyjs6q/image/upload/v1758118693/IMG_5571_jkkhcb.jpg",
    "https://res.cloudinary.com/duynyjs6q/image/upload/v1758120441/IMG_5475_rfjlh1.jpg",
];

/// Local image shown when a feed image fails to load.
pub const FALLBACK_IMAGE: &str = "./Downloads/seth-portrait.jpg";

/// How an image preload finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadOutcome {
    /// The image loaded.
    Loaded,
    /// The image failed to load.
    Failed,
}

/// The result of changing the current image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedChange {
    /// New current index.
    pub index: usize,
    /// Counter text for the new index.
    pub counter: String,
}

/// Index into a fixed, non-empty list of image URLs.
#[derive(Clone, Debug)]
pub struct Feed {
    images: &'static [&'static str],
    fallback: &'static str,
    index: usize,
}

impl Feed {
    /// Creates a feed at index 0.
    ///
    /// # Panics
    ///
    /// Panics if `images` is empty.
    #[must_use]
    pub fn new(images: &'static [&'static str], fallback: &'static str) -> Self {
        assert!(!images.is_empty(), "feed needs at least one image");
        Self {
            images,
            fallback,
            index: 0,
        }
    }

    /// Creates the landing page feed.
    #[must_use]
    pub fn landing() -> Self {
        Self::new(&FEED_IMAGES, FALLBACK_IMAGE)
    }

    /// Returns the current index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of images.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`; a feed is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the URL at the current index.
    #[must_use]
    pub fn current_url(&self) -> &'static str {
        self.images[self.index]
    }

    /// Returns `true` if the feed has enough images to auto-advance.
    #[must_use]
    pub const fn auto_advances(&self) -> bool {
        self.images.len() > 1
    }

    /// Returns the index after the current one, wrapping to the first.
    #[must_use]
    pub const fn next_index(&self) -> usize {
        (self.index + 1) % self.images.len()
    }

    /// Returns the index before the current one, wrapping to the last.
    #[must_use]
    pub const fn prev_index(&self) -> usize {
        if self.index == 0 {
            self.images.len() - 1
        } else {
            self.index - 1
        }
    }

    /// Moves to `index` (taken modulo the feed length) and returns the new
    /// counter text.
    pub fn change(&mut self, index: usize) -> FeedChange {
        self.index = index % self.images.len();
        FeedChange {
            index: self.index,
            counter: self.counter_text(),
        }
    }

    /// Moves to the next image.
    pub fn next(&mut self) -> FeedChange {
        self.change(self.next_index())
    }

    /// Moves to the previous image.
    pub fn prev(&mut self) -> FeedChange {
        self.change(self.prev_index())
    }

    /// Returns the source to display for a finished preload of `url`.
    #[must_use]
    pub const fn resolve(&self, url: &'static str, outcome: LoadOutcome) -> &'static str {
        match outcome {
            LoadOutcome::Loaded => url,
            LoadOutcome::Failed => self.fallback,
        }
    }

    /// Returns the counter text: one-based index and length, each padded to
    /// two digits.
    #[must_use]
    pub fn counter_text(&self) -> String {
        format!("{:02} / {:02}", self.index + 1, self.images.len())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn starts_at_first_image() {
        let feed = Feed::landing();
        assert_eq!(feed.index(), 0);
        assert_eq!(feed.len(), 5);
        assert_eq!(feed.counter_text(), "01 / 05");
        assert!(feed.auto_advances());
    }

    #[test]
    fn counter_for_third_image() {
        let mut feed = Feed::landing();
        let change = feed.change(2);
        assert_eq!(change.counter, "03 / 05");
        assert_eq!(feed.current_url(), FEED_IMAGES[2]);
    }

    #[test]
    fn next_clicks_wrap() {
        for n in 0..17 {
            let mut feed = Feed::landing();
            for _ in 0..n {
                feed.next();
            }
            assert_eq!(feed.index(), n % 5, "after {n} next clicks");
        }
    }

    #[test]
    fn prev_clicks_wrap() {
        for n in 0..17 {
            let mut feed = Feed::landing();
            for _ in 0..n {
                feed.prev();
            }
            assert_eq!(feed.index(), (5 - n % 5) % 5, "after {n} prev clicks");
        }
    }

    #[test]
    fn advance_ticks_alone_visit_every_image() {
        let mut feed = Feed::landing();
        assert!(feed.auto_advances());
        let mut seen = Vec::new();
        for _ in 0..feed.len() {
            let index = feed.next_index();
            feed.change(index);
            seen.push(feed.current_url());
        }
        assert_eq!(feed.index(), 0, "a full round returns to the first image");
        assert_eq!(seen.last(), Some(&FEED_IMAGES[0]));
        for url in &FEED_IMAGES[1..] {
            assert!(seen.contains(url), "{url} never shown");
        }
    }

    #[test]
    fn failed_load_falls_back() {
        let feed = Feed::landing();
        let url = feed.current_url();
        assert_eq!(feed.resolve(url, LoadOutcome::Loaded), url);
        assert_eq!(feed.resolve(url, LoadOutcome::Failed), FALLBACK_IMAGE);
    }

    #[test]
    fn single_image_feed_does_not_auto_advance() {
        static ONE: [&str; 1] = ["only.jpg"];
        let mut feed = Feed::new(&ONE, "fallback.jpg");
        assert!(!feed.auto_advances());
        assert_eq!(feed.next().index, 0);
        assert_eq!(feed.prev().counter, "01 / 01");
    }

    #[test]
    #[should_panic(expected = "feed needs at least one image")]
    fn empty_feed_panics() {
        let _ = Feed::new(&[], "fallback.jpg");
    }
}
