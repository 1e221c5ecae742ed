/*!
 * Lemma dictionary for the rule-based annotators.
 *
 * Maps a normalized surface form to its lemma and part-of-speech tag.
 * The built-in table covers Romanian closed-class words and the inflected
 * forms of the speech verbs and abstract nouns the statistics look for.
 * It can be extended from a tab-separated file with one
 * `form<TAB>lemma<TAB>POS` entry per line; `#` starts a comment.
 */

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use super::{normalize_form, PosTag};
use crate::errors::AnnotationError;

/// Lemma and tag of a known form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub lemma: String,
    pub pos: PosTag,
}

/// Closed-class words: (form, lemma, tag).
const CLOSED_CLASS: &[(&str, &str, PosTag)] = &[
    // determiners and articles
    ("un", "un", PosTag::Det),
    ("o", "un", PosTag::Det),
    ("unui", "un", PosTag::Det),
    ("unei", "un", PosTag::Det),
    ("unor", "un", PosTag::Det),
    ("niște", "niște", PosTag::Det),
    ("acest", "acest", PosTag::Det),
    ("această", "acest", PosTag::Det),
    ("acești", "acest", PosTag::Det),
    ("aceste", "acest", PosTag::Det),
    ("acestui", "acest", PosTag::Det),
    ("acestei", "acest", PosTag::Det),
    ("acestor", "acest", PosTag::Det),
    ("acel", "acel", PosTag::Det),
    ("acea", "acel", PosTag::Det),
    ("acei", "acel", PosTag::Det),
    ("acele", "acel", PosTag::Det),
    ("fiecare", "fiecare", PosTag::Det),
    ("orice", "orice", PosTag::Det),
    ("toată", "tot", PosTag::Det),
    ("toți", "tot", PosTag::Det),
    ("toate", "tot", PosTag::Det),
    ("al", "al", PosTag::Det),
    ("ale", "al", PosTag::Det),
    ("cel", "cel", PosTag::Det),
    ("cea", "cel", PosTag::Det),
    ("cei", "cel", PosTag::Det),
    ("cele", "cel", PosTag::Det),
    // adpositions
    ("în", "în", PosTag::Adp),
    ("la", "la", PosTag::Adp),
    ("de", "de", PosTag::Adp),
    ("pe", "pe", PosTag::Adp),
    ("cu", "cu", PosTag::Adp),
    ("din", "din", PosTag::Adp),
    ("pentru", "pentru", PosTag::Adp),
    ("prin", "prin", PosTag::Adp),
    ("despre", "despre", PosTag::Adp),
    ("spre", "spre", PosTag::Adp),
    ("către", "către", PosTag::Adp),
    ("fără", "fără", PosTag::Adp),
    ("după", "după", PosTag::Adp),
    ("sub", "sub", PosTag::Adp),
    ("peste", "peste", PosTag::Adp),
    ("până", "până", PosTag::Adp),
    ("lângă", "lângă", PosTag::Adp),
    ("între", "între", PosTag::Adp),
    ("dintre", "dintre", PosTag::Adp),
    ("printre", "printre", PosTag::Adp),
    ("asupra", "asupra", PosTag::Adp),
    ("împotriva", "împotriva", PosTag::Adp),
    ("într", "întru", PosTag::Adp),
    ("dintr", "din", PosTag::Adp),
    ("printr", "prin", PosTag::Adp),
    // coordinating conjunctions
    ("și", "și", PosTag::Cconj),
    ("iar", "iar", PosTag::Cconj),
    ("dar", "dar", PosTag::Cconj),
    ("însă", "însă", PosTag::Cconj),
    ("ci", "ci", PosTag::Cconj),
    ("sau", "sau", PosTag::Cconj),
    ("ori", "ori", PosTag::Cconj),
    ("nici", "nici", PosTag::Cconj),
    ("deci", "deci", PosTag::Cconj),
    // subordinating conjunctions
    ("că", "că", PosTag::Sconj),
    ("dacă", "dacă", PosTag::Sconj),
    ("încât", "încât", PosTag::Sconj),
    ("deși", "deși", PosTag::Sconj),
    ("fiindcă", "fiindcă", PosTag::Sconj),
    ("deoarece", "deoarece", PosTag::Sconj),
    ("ca", "ca", PosTag::Sconj),
    // particles
    ("să", "să", PosTag::Part),
    ("nu", "nu", PosTag::Part),
    // auxiliaries
    ("am", "avea", PosTag::Aux),
    ("ai", "avea", PosTag::Aux),
    ("a", "avea", PosTag::Aux),
    ("au", "avea", PosTag::Aux),
    ("avem", "avea", PosTag::Aux),
    ("aveți", "avea", PosTag::Aux),
    ("ar", "avea", PosTag::Aux),
    ("aș", "avea", PosTag::Aux),
    ("este", "fi", PosTag::Aux),
    ("e", "fi", PosTag::Aux),
    ("sunt", "fi", PosTag::Aux),
    ("ești", "fi", PosTag::Aux),
    ("suntem", "fi", PosTag::Aux),
    ("sunteți", "fi", PosTag::Aux),
    ("era", "fi", PosTag::Aux),
    ("erau", "fi", PosTag::Aux),
    ("eram", "fi", PosTag::Aux),
    ("fost", "fi", PosTag::Aux),
    ("fi", "fi", PosTag::Aux),
    ("fie", "fi", PosTag::Aux),
    ("va", "vrea", PosTag::Aux),
    ("vor", "vrea", PosTag::Aux),
    ("vom", "vrea", PosTag::Aux),
    ("veți", "vrea", PosTag::Aux),
    ("vei", "vrea", PosTag::Aux),
    // pronouns
    ("eu", "eu", PosTag::Pron),
    ("mă", "eu", PosTag::Pron),
    ("mine", "eu", PosTag::Pron),
    ("mi", "eu", PosTag::Pron),
    ("tu", "tu", PosTag::Pron),
    ("te", "tu", PosTag::Pron),
    ("tine", "tu", PosTag::Pron),
    ("el", "el", PosTag::Pron),
    ("îl", "el", PosTag::Pron),
    ("lui", "el", PosTag::Pron),
    ("ea", "el", PosTag::Pron),
    ("noi", "noi", PosTag::Pron),
    ("ne", "noi", PosTag::Pron),
    ("voi", "voi", PosTag::Pron),
    ("vă", "voi", PosTag::Pron),
    ("ei", "el", PosTag::Pron),
    ("ele", "el", PosTag::Pron),
    ("îi", "el", PosTag::Pron),
    ("le", "el", PosTag::Pron),
    ("lor", "el", PosTag::Pron),
    ("se", "sine", PosTag::Pron),
    ("s", "sine", PosTag::Pron),
    ("își", "sine", PosTag::Pron),
    ("sine", "sine", PosTag::Pron),
    ("meu", "meu", PosTag::Pron),
    ("mea", "meu", PosTag::Pron),
    ("mei", "meu", PosTag::Pron),
    ("mele", "meu", PosTag::Pron),
    ("tău", "tău", PosTag::Pron),
    ("ta", "tău", PosTag::Pron),
    ("său", "său", PosTag::Pron),
    ("sa", "său", PosTag::Pron),
    ("cine", "cine", PosTag::Pron),
    ("ce", "ce", PosTag::Pron),
    ("care", "care", PosTag::Pron),
    ("cineva", "cineva", PosTag::Pron),
    ("ceva", "ceva", PosTag::Pron),
    ("nimeni", "nimeni", PosTag::Pron),
    ("nimic", "nimic", PosTag::Pron),
    ("acesta", "acesta", PosTag::Pron),
    ("aceasta", "acesta", PosTag::Pron),
    ("acela", "acela", PosTag::Pron),
    ("aceea", "acela", PosTag::Pron),
    // adverbs
    ("foarte", "foarte", PosTag::Adv),
    ("mai", "mai", PosTag::Adv),
    ("acum", "acum", PosTag::Adv),
    ("aici", "aici", PosTag::Adv),
    ("acolo", "acolo", PosTag::Adv),
    ("atunci", "atunci", PosTag::Adv),
    ("deja", "deja", PosTag::Adv),
    ("încă", "încă", PosTag::Adv),
    ("doar", "doar", PosTag::Adv),
    ("numai", "numai", PosTag::Adv),
    ("chiar", "chiar", PosTag::Adv),
    ("bine", "bine", PosTag::Adv),
    ("mult", "mult", PosTag::Adv),
    ("puțin", "puțin", PosTag::Adv),
    ("azi", "azi", PosTag::Adv),
    ("astăzi", "astăzi", PosTag::Adv),
    ("mâine", "mâine", PosTag::Adv),
    ("ieri", "ieri", PosTag::Adv),
    ("mereu", "mereu", PosTag::Adv),
    ("niciodată", "niciodată", PosTag::Adv),
    ("uneori", "uneori", PosTag::Adv),
    ("apoi", "apoi", PosTag::Adv),
    ("totuși", "totuși", PosTag::Adv),
    ("cum", "cum", PosTag::Adv),
    ("unde", "unde", PosTag::Adv),
    ("când", "când", PosTag::Adv),
    ("aproape", "aproape", PosTag::Adv),
    ("departe", "departe", PosTag::Adv),
    ("așa", "așa", PosTag::Adv),
    ("prea", "prea", PosTag::Adv),
    ("tot", "tot", PosTag::Adv),
    // interjections
    ("ah", "ah", PosTag::Intj),
    ("oh", "oh", PosTag::Intj),
    ("vai", "vai", PosTag::Intj),
    ("hei", "hei", PosTag::Intj),
    ("aoleu", "aoleu", PosTag::Intj),
    ("bravo", "bravo", PosTag::Intj),
    ("iată", "iată", PosTag::Intj),
    // numerals
    ("unu", "unu", PosTag::Num),
    ("doi", "doi", PosTag::Num),
    ("două", "doi", PosTag::Num),
    ("trei", "trei", PosTag::Num),
    ("patru", "patru", PosTag::Num),
    ("cinci", "cinci", PosTag::Num),
    ("zece", "zece", PosTag::Num),
];

/// Inflected verb forms grouped by lemma.
const VERB_FORMS: &[(&str, &[&str])] = &[
    ("vorbi", &["vorbi", "vorbesc", "vorbești", "vorbește", "vorbim", "vorbiți", "vorbea", "vorbeau", "vorbeam", "vorbit", "vorbind", "vorbească"]),
    ("discuta", &["discuta", "discut", "discuți", "discută", "discutăm", "discutați", "discutau", "discutat", "discutând", "discute"]),
    ("conversa", &["conversa", "conversez", "conversezi", "conversează", "conversăm", "conversați", "conversau", "conversat", "conversând"]),
    ("dialoga", &["dialoga", "dialoghez", "dialoghezi", "dialoghează", "dialogăm", "dialogau", "dialogat", "dialogând"]),
    ("bârfi", &["bârfi", "bârfesc", "bârfești", "bârfește", "bârfim", "bârfeau", "bârfit", "bârfind"]),
    ("dezbate", &["dezbate", "dezbat", "dezbați", "dezbatem", "dezbateți", "dezbăteau", "dezbătut", "dezbătând"]),
    ("delibera", &["delibera", "deliberez", "deliberează", "deliberăm", "deliberau", "deliberat", "deliberând"]),
    ("spune", &["spune", "spun", "spui", "spunem", "spuneți", "spunea", "spuneau", "spus", "spunând"]),
    ("pleca", &["pleca", "plec", "pleci", "pleacă", "plecăm", "plecați", "pleca", "plecau", "plecat", "plecând"]),
    ("merge", &["merge", "merg", "mergi", "mergem", "mergeți", "mergea", "mergeau", "mers", "mergând"]),
    ("veni", &["veni", "vin", "vii", "vine", "venim", "veniți", "venea", "veneau", "venit", "venind"]),
    ("face", &["face", "fac", "faci", "facem", "faceți", "făcea", "făceau", "făcut", "făcând"]),
    ("vedea", &["vedea", "văd", "vezi", "vede", "vedem", "vedeți", "vedeau", "văzut", "văzând"]),
    ("ști", &["ști", "știu", "știi", "știe", "știm", "știți", "știa", "știau", "știut"]),
    ("putea", &["putea", "pot", "poți", "poate", "putem", "puteți", "puteau", "putut"]),
    ("vrea", &["vrea", "vreau", "vrei", "vrem", "vreți", "voia", "voiau", "vrut"]),
    ("iubi", &["iubi", "iubesc", "iubești", "iubește", "iubim", "iubiți", "iubea", "iubeau", "iubit"]),
    ("simți", &["simți", "simt", "simte", "simțim", "simțea", "simțeau", "simțit"]),
    ("gândi", &["gândi", "gândesc", "gândești", "gândește", "gândim", "gândea", "gândeau", "gândit"]),
    ("teme", &["teme", "tem", "temi", "temem", "temea", "temeau", "temut"]),
];

/// Inflected noun forms grouped by lemma.
const NOUN_FORMS: &[(&str, &[&str])] = &[
    ("iubire", &["iubire", "iubirea", "iubirii", "iubiri", "iubirile", "iubirilor"]),
    ("frică", &["frică", "frica", "fricii", "frici", "fricile", "fricilor"]),
    ("bucurie", &["bucurie", "bucuria", "bucuriei", "bucurii", "bucuriile", "bucuriilor"]),
    ("tristețe", &["tristețe", "tristețea", "tristeții", "tristeți"]),
    ("libertate", &["libertate", "libertatea", "libertății", "libertăți", "libertățile"]),
    ("gândire", &["gândire", "gândirea", "gândirii", "gândiri"]),
    ("idee", &["idee", "ideea", "ideii", "idei", "ideile", "ideilor"]),
    ("emoție", &["emoție", "emoția", "emoției", "emoții", "emoțiile", "emoțiilor"]),
    ("casă", &["casă", "casa", "casei", "case", "casele", "caselor"]),
    ("om", &["om", "omul", "omului", "oameni", "oamenii", "oamenilor"]),
    ("zi", &["zi", "ziua", "zilei", "zile", "zilele", "zilelor"]),
];

/// Form → lemma/tag lookup table.
#[derive(Debug, Clone, Default)]
pub struct LemmaDictionary {
    entries: HashMap<String, DictionaryEntry>,
}

impl LemmaDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary seeded with the built-in Romanian table
    pub fn builtin() -> Self {
        let mut dictionary = Self::new();

        for (form, lemma, pos) in CLOSED_CLASS {
            dictionary.insert(form, lemma, *pos);
        }
        for (lemma, forms) in VERB_FORMS {
            for form in forms.iter() {
                dictionary.insert(form, lemma, PosTag::Verb);
            }
        }
        for (lemma, forms) in NOUN_FORMS {
            for form in forms.iter() {
                dictionary.insert(form, lemma, PosTag::Noun);
            }
        }

        dictionary
    }

    /// Add or replace an entry
    pub fn insert(&mut self, form: &str, lemma: &str, pos: PosTag) {
        self.entries.insert(
            normalize_form(form),
            DictionaryEntry {
                lemma: normalize_form(lemma),
                pos,
            },
        );
    }

    /// Look up a surface form, case-insensitively
    pub fn lookup(&self, form: &str) -> Option<&DictionaryEntry> {
        self.entries.get(&normalize_form(form))
    }

    /// Number of known forms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no form is known
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge entries parsed from tab-separated content; later entries win.
    pub fn extend_from_tsv(&mut self, content: &str) -> Result<usize, AnnotationError> {
        let mut added = 0;

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            if fields.len() != 3 {
                return Err(AnnotationError::InvalidDictionaryLine {
                    line: line_no,
                    message: format!("expected 3 tab-separated fields, found {}", fields.len()),
                });
            }
            if fields[0].is_empty() || fields[1].is_empty() {
                return Err(AnnotationError::InvalidDictionaryLine {
                    line: line_no,
                    message: "form and lemma must not be empty".to_string(),
                });
            }

            let pos: PosTag = fields[2].parse().map_err(|message| {
                AnnotationError::InvalidDictionaryLine {
                    line: line_no,
                    message,
                }
            })?;

            self.insert(fields[0], fields[1], pos);
            added += 1;
        }

        Ok(added)
    }

    /// Merge entries from a tab-separated file
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, AnnotationError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let added = self.extend_from_tsv(&content)?;
        debug!(
            "Loaded {} lemma dictionary entries from {}",
            added,
            path.as_ref().display()
        );
        Ok(added)
    }
}

/// Strip a Romanian enclitic definite article from a lowercase form.
///
/// Only applied when at least three characters of stem remain.
pub fn strip_article(form: &str) -> String {
    const RULES: &[(&str, &str)] = &[
        ("ului", ""),
        ("ilor", "i"),
        ("ele", "e"),
        ("ea", "e"),
        ("ul", ""),
    ];

    for (suffix, replacement) in RULES {
        if let Some(stem) = form.strip_suffix(suffix) {
            if stem.chars().count() >= 3 {
                return format!("{}{}", stem, replacement);
            }
        }
    }

    form.to_string()
}
