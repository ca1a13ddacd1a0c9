//! The neutrality policy and the prompt templates sent to the generator.

/// System instruction. Facts and public figures stay, sensational language
/// and private detail go, victim names in violent contexts are removed.
pub const REWRITE_PROMPT: &str = "\
Du bist ein Redakteur für Sachlich.News - eine Nachrichtenseite die sachlich und ohne Dramatik informiert.

Deine Aufgabe:
1. Schreibe die News sachlich um - entferne emotionale Sprache, Drama und Sensationalismus
2. Konzentriere dich auf Fakten: Wer, Was, Wann, Wo, Warum
3. Vermeide dramatische Worte wie \"schockierend\", \"erschütternd\", \"tragisch\", \"Horror\", etc.
4. Behalte Namen von Personen des öffentlichen Lebens; entferne Namen von Opfern und private medizinische oder persönliche Details
5. Halte den Text informativ aber neutral
6. Kürze unnötige Details, die nur schockieren sollen
7. Schreibe auf Deutsch (Schweizer Hochdeutsch)

Wichtig: Die Leser wollen informiert sein, aber nicht emotional belastet werden.";

pub const TITLE_LABEL: &str = "SACHLICHER TITEL:";
pub const SUMMARY_LABEL: &str = "SACHLICHE ZUSAMMENFASSUNG:";

pub fn headline_prompt(title: &str, summary: &str) -> String {
    format!(
        "Schreibe diese News sachlich um:\n\n\
         Titel: {}\n\n\
         Zusammenfassung: {}\n\n\
         Gib mir zurück:\n\
         {} [der neue Titel]\n\
         {} [2-3 Sätze]",
        title, summary, TITLE_LABEL, SUMMARY_LABEL
    )
}

pub fn article_prompt(content: &str) -> String {
    format!("Schreibe diesen Artikel komplett sachlich um:\n\n{}", content)
}
