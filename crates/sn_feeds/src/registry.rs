//! The configured upstream sources. Built once at process start;
//! categories and retrieval modes never change at runtime.

use sn_core::{Category, SourceDescriptor};

pub fn sources() -> Vec<SourceDescriptor> {
    vec![
        // Zürich
        SourceDescriptor::feed(
            "https://www.blick.ch/schweiz/zuerich/rss.xml",
            Category::Zuerich,
            "Blick Zürich",
        ),
        SourceDescriptor::scrape(
            "https://www.20min.ch/zuerich",
            Category::Zuerich,
            "20 Minuten Zürich",
            "20min",
        ),
        // Schweiz
        SourceDescriptor::feed(
            "https://www.blick.ch/schweiz/rss.xml",
            Category::Schweiz,
            "Blick Schweiz",
        ),
        SourceDescriptor::feed(
            "https://www.blick.ch/politik/rss.xml",
            Category::Schweiz,
            "Blick Politik",
        ),
        SourceDescriptor::feed(
            "https://www.blick.ch/wirtschaft/rss.xml",
            Category::Schweiz,
            "Blick Wirtschaft",
        ),
        SourceDescriptor::scrape(
            "https://www.20min.ch/schweiz",
            Category::Schweiz,
            "20 Minuten Schweiz",
            "20min",
        ),
        // International
        SourceDescriptor::feed(
            "https://www.blick.ch/ausland/rss.xml",
            Category::International,
            "Blick Ausland",
        ),
        SourceDescriptor::scrape(
            "https://www.20min.ch/ausland",
            Category::International,
            "20 Minuten Ausland",
            "20min",
        ),
        // People & Unterhaltung, inkl. Sport
        SourceDescriptor::feed(
            "https://www.blick.ch/people-tv/rss.xml",
            Category::People,
            "Blick People & TV",
        ),
        SourceDescriptor::feed(
            "https://www.blick.ch/life/rss.xml",
            Category::People,
            "Blick Life",
        ),
        SourceDescriptor::feed(
            "https://www.blick.ch/sport/rss.xml",
            Category::People,
            "Blick Sport",
        ),
        SourceDescriptor::scrape(
            "https://www.20min.ch/people",
            Category::People,
            "20 Minuten People",
            "20min",
        ),
        // Alternative Medien
        SourceDescriptor::feed(
            "https://www.infosperber.ch/feed/",
            Category::Alternativ,
            "Infosperber",
        ),
        SourceDescriptor::feed(
            "https://www.zeitpunkt.ch/rss.xml",
            Category::Alternativ,
            "Zeitpunkt",
        ),
        SourceDescriptor::feed(
            "https://schweizermonat.ch/feed/",
            Category::Alternativ,
            "Schweizer Monat",
        ),
        SourceDescriptor::scrape(
            "https://weltwoche.ch/",
            Category::Alternativ,
            "Weltwoche",
            "weltwoche",
        ),
        SourceDescriptor::scrape(
            "https://www.nebelspalter.ch/",
            Category::Alternativ,
            "Nebelspalter",
            "nebelspalter",
        ),
    ]
}
