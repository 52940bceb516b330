use itertools::Itertools;
use log::debug;
use rand::Rng;
use std::collections::BTreeSet;

use crate::quiz::definition::question::Question;
use crate::quiz::selection::shuffle;


const QUESTION_MARKER: &str = "<question>";
const VARIANT_MARKER: &str = "<variant>";
const VARIANT_RIGHT_MARKER: &str = "<variantright>";

// Shared prefix of both option markers.
const OPTION_MARKER_PREFIX: &str = "<variant";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Marker {
    Variant,
    VariantRight,
}

impl Marker {
    fn len(self) -> usize {
        match self {
            Marker::Variant => VARIANT_MARKER.len(),
            Marker::VariantRight => VARIANT_RIGHT_MARKER.len(),
        }
    }
}

/// Finds the first option marker at or after byte offset `from`.
fn find_marker(text: &str, from: usize) -> Option<(usize, Marker)> {
    let mut cursor = from;
    while let Some(offset) = text[cursor..].find(OPTION_MARKER_PREFIX) {
        let position = cursor + offset;
        let rest = &text[position..];
        if rest.starts_with(VARIANT_MARKER) {
            return Some((position, Marker::Variant));
        }
        if rest.starts_with(VARIANT_RIGHT_MARKER) {
            return Some((position, Marker::VariantRight));
        }
        cursor = position + OPTION_MARKER_PREFIX.len();
    }
    None
}

#[derive(Debug, Default, Eq, PartialEq)]
struct Segment<'a> {
    stem: &'a str,
    variants: Vec<&'a str>,
    right_variants: Vec<&'a str>,
}

/// Splits one question block into its stem and tagged option texts. Every
/// option body runs until the next option marker or the end of the block.
fn scan_segment(segment: &str) -> Option<Segment<'_>> {
    let (first_position, first_marker) = find_marker(segment, 0)?;
    let mut parsed = Segment {
        stem: segment[..first_position].trim(),
        ..Default::default()
    };

    let mut current = Some((first_position, first_marker));
    while let Some((position, marker)) = current {
        let body_start = position + marker.len();
        let next = find_marker(segment, body_start);
        let body_end = next.map_or(segment.len(), |(p, _)| p);
        let body = segment[body_start..body_end].trim();
        if !body.is_empty() {
            match marker {
                Marker::Variant => parsed.variants.push(body),
                Marker::VariantRight => parsed.right_variants.push(body),
            }
        }
        current = next;
    }

    Some(parsed)
}

fn build_question<R: Rng + ?Sized>(segment: &str, rng: &mut R) -> Option<Question> {
    let parsed = scan_segment(segment)?;
    if parsed.stem.is_empty() || parsed.right_variants.is_empty() {
        return None;
    }

    let mut options: Vec<String> = parsed
        .variants
        .iter()
        .unique()
        .map(|v| v.to_string())
        .collect();
    for right_variant in &parsed.right_variants {
        if !options.iter().any(|o| o == right_variant) {
            options.push(right_variant.to_string());
        }
    }
    if options.is_empty() {
        return None;
    }

    let correct_options: BTreeSet<String> =
        parsed.right_variants.iter().map(|v| v.to_string()).collect();
    Some(Question::new(
        parsed.stem.to_owned(),
        shuffle(&options, rng),
        correct_options,
    ))
}

#[derive(Debug)]
pub struct Extraction {
    pub questions: Vec<Question>,
    pub segments: usize,
}

impl Extraction {
    pub fn dropped(&self) -> usize {
        self.segments - self.questions.len()
    }
}

/// Parses every question block of normalized text, in source order.
/// Malformed blocks are skipped rather than reported.
pub fn extract<R: Rng + ?Sized>(normalized: &str, rng: &mut R) -> Extraction {
    let mut segments = 0;
    let mut questions = Vec::new();
    for segment in normalized.split(QUESTION_MARKER).filter(|s| !s.is_empty()) {
        segments += 1;
        match build_question(segment, rng) {
            Some(question) => questions.push(question),
            None => debug!("Dropping malformed question block #{}", segments),
        }
    }
    Extraction {
        questions,
        segments,
    }
}
