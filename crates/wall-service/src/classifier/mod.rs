//! Sentiment classification

pub mod client;

pub use client::{Classification, ClassifierError, SentimentClassifier};
