//! Built-in catalog used when no word list is configured or saved.

use crate::domain::{Sense, VocabularyEntry};

// (word, definition, pronunciation, part of speech, category, example, synonyms, image)
type SampleWord = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str, [&'static str; 4], &'static str);

const SAMPLE_WORDS: [SampleWord; 10] = [
  (
    "Serendipity",
    "The occurrence and development of events by chance in a happy or beneficial way",
    "ser-ən-ˈdi-pə-tē",
    "noun",
    "Abstract Concepts",
    "Meeting her old friend at the coffee shop was pure serendipity.",
    ["chance", "fortune", "luck", "providence"],
    "https://images.unsplash.com/photo-1518640467707-6811f4a6ab73?w=400&h=300&fit=crop",
  ),
  (
    "Ephemeral",
    "Lasting for a very short time",
    "ɪˈfem(ə)rəl",
    "adjective",
    "Descriptive",
    "The beauty of cherry blossoms is ephemeral, lasting only a few weeks.",
    ["temporary", "fleeting", "transient", "brief"],
    "https://images.unsplash.com/photo-1522383225653-ed111181a951?w=400&h=300&fit=crop",
  ),
  (
    "Ubiquitous",
    "Present, appearing, or found everywhere",
    "yo͞oˈbikwədəs",
    "adjective",
    "Descriptive",
    "Smartphones have become ubiquitous in modern society.",
    ["omnipresent", "pervasive", "universal", "widespread"],
    "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=400&h=300&fit=crop",
  ),
  (
    "Mellifluous",
    "Sweet or musical; pleasant to hear",
    "məˈliflo͞oəs",
    "adjective",
    "Sensory",
    "Her mellifluous voice captivated the entire audience.",
    ["melodious", "harmonious", "sweet-sounding", "musical"],
    "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=300&fit=crop",
  ),
  (
    "Perspicacious",
    "Having a ready insight into and understanding of things",
    "ˌpərspɪˈkeɪʃəs",
    "adjective",
    "Intellectual",
    "The detective's perspicacious observations solved the case quickly.",
    ["perceptive", "astute", "shrewd", "discerning"],
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=300&fit=crop",
  ),
  (
    "Quintessential",
    "Representing the most perfect example of a quality or class",
    "ˌkwin(t)əˈsen(t)SHəl",
    "adjective",
    "Descriptive",
    "Paris is the quintessential romantic city.",
    ["typical", "archetypal", "classic", "ideal"],
    "https://images.unsplash.com/photo-1502602898536-47ad22581b52?w=400&h=300&fit=crop",
  ),
  (
    "Cacophony",
    "A harsh, discordant mixture of sounds",
    "kəˈkäfənē",
    "noun",
    "Sensory",
    "The construction site created a cacophony of drilling and hammering.",
    ["discord", "din", "racket", "clamor"],
    "https://images.unsplash.com/photo-1415734117253-603b0c3c3b3c?w=400&h=300&fit=crop",
  ),
  (
    "Surreptitious",
    "Kept secret, especially because it would not be approved of",
    "ˌsərəpˈtiSHəs",
    "adjective",
    "Behavior",
    "He cast a surreptitious glance at his watch during the meeting.",
    ["secretive", "stealthy", "furtive", "covert"],
    "https://images.unsplash.com/photo-1574192324001-ee41e18ed679?w=400&h=300&fit=crop",
  ),
  (
    "Magnanimous",
    "Very generous or forgiving, especially toward a rival or less powerful person",
    "maɡˈnanəməs",
    "adjective",
    "Character",
    "Despite winning, she was magnanimous toward her defeated opponent.",
    ["generous", "charitable", "benevolent", "noble"],
    "https://images.unsplash.com/photo-1529626455594-4ff0802cfb7e?w=400&h=300&fit=crop",
  ),
  (
    "Ineffable",
    "Too great or extreme to be expressed or described in words",
    "ɪnˈɛfəbəl",
    "adjective",
    "Abstract Concepts",
    "The beauty of the sunset was ineffable, leaving everyone speechless.",
    ["indescribable", "inexpressible", "unspeakable", "sublime"],
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop",
  ),
];

pub fn sample_catalog() -> Vec<VocabularyEntry> {
  SAMPLE_WORDS
    .iter()
    .map(|(word, definition, pronunciation, pos, category, example, synonyms, image)| {
      let mut entry = VocabularyEntry::new(
        &word.to_lowercase(),
        word,
        category,
        vec![Sense::new(pos, definition, Some(example))],
      );
      entry.pronunciation = Some(pronunciation.to_string());
      entry.synonyms = synonyms.iter().map(|s| s.to_string()).collect();
      entry.image_url = Some(image.to_string());
      entry
    })
    .collect()
}

/// Shown alone when every dictionary lookup failed
pub fn placeholder_entry() -> VocabularyEntry {
  VocabularyEntry::new(
    "placeholder",
    "Vocabulary",
    crate::config::DEFAULT_CATEGORY,
    vec![Sense::new(
      "noun",
      "The body of words used in a particular language",
      Some("Words could not be loaded right now. Try reloading the catalog."),
    )],
  )
}
