// Copyright (c) 2025 Contentgen
// SPDX-License-Identifier: BUSL-1.1
//! Configuration choices for a generation request
//!
//! Closed enums for the five form controls. Wire labels match the labels
//! shown in the form; unknown values are rejected at deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target audience age group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    Kid,
    Adult,
    #[serde(rename = "Senior Citizen")]
    SeniorCitizen,
}

impl AgeGroup {
    pub const ALL: [Self; 3] = [Self::Kid, Self::Adult, Self::SeniorCitizen];

    /// Human-readable label, as shown in the form and the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kid => "Kid",
            Self::Adult => "Adult",
            Self::SeniorCitizen => "Senior Citizen",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of content to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskType {
    #[serde(rename = "Write a sales copy")]
    SalesCopy,
    #[serde(rename = "Create a tweet")]
    Tweet,
    #[serde(rename = "Write a product description")]
    ProductDescription,
    #[serde(rename = "Explain a concept")]
    ConceptExplanation,
}

impl TaskType {
    pub const ALL: [Self; 4] = [
        Self::SalesCopy,
        Self::Tweet,
        Self::ProductDescription,
        Self::ConceptExplanation,
    ];

    /// Human-readable label, as shown in the form and the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Self::SalesCopy => "Write a sales copy",
            Self::Tweet => "Create a tweet",
            Self::ProductDescription => "Write a product description",
            Self::ConceptExplanation => "Explain a concept",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Target publishing platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    Twitter,
    Facebook,
    LinkedIn,
    TikTok,
}

impl Platform {
    pub const ALL: [Self; 5] = [
        Self::Instagram,
        Self::Twitter,
        Self::Facebook,
        Self::LinkedIn,
        Self::TikTok,
    ];

    /// Human-readable label, as shown in the form and the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
            Self::TikTok => "TikTok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tone of the generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentStyle {
    Persuasive,
    Humorous,
    Inspirational,
    Serious,
}

impl ContentStyle {
    pub const ALL: [Self; 4] = [
        Self::Persuasive,
        Self::Humorous,
        Self::Inspirational,
        Self::Serious,
    ];

    /// Human-readable label, as shown in the form and the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Self::Persuasive => "Persuasive",
            Self::Humorous => "Humorous",
            Self::Inspirational => "Inspirational",
            Self::Serious => "Serious",
        }
    }
}

impl fmt::Display for ContentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
