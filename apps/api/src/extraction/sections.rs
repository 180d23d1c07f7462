//! Section splitter for the `Education:` / `Experience:` / `Skills:` CV convention.
//!
//! Headers are matched literally and case-sensitively, anywhere in a line. Sections
//! are expected in that fixed order: the parser only ever moves forward through
//! `Preamble → InEducation → InExperience → InSkills`, and a header that cannot move
//! it forward is treated as ordinary text of the current section. A CV listing
//! `Skills:` before `Education:` therefore puts the education block inside skills.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Header {
    Education,
    Experience,
    Skills,
}

impl Header {
    const ALL: [Header; 3] = [Header::Education, Header::Experience, Header::Skills];

    fn literal(self) -> &'static str {
        match self {
            Header::Education => "Education:",
            Header::Experience => "Experience:",
            Header::Skills => "Skills:",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    Preamble,
    InEducation,
    InExperience,
    InSkills,
}

impl ParserState {
    /// Education ends at Experience or Skills, Experience ends at Skills, Skills runs to the end.
    fn on_header(self, header: Header) -> Option<ParserState> {
        use Header::*;
        use ParserState::*;

        match (self, header) {
            (Preamble, Education) => Some(InEducation),
            (Preamble | InEducation, Experience) => Some(InExperience),
            (Preamble | InEducation | InExperience, Skills) => Some(InSkills),
            _ => None,
        }
    }
}

/// Line lists for the three recognised sections. A missing section is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub skills: Vec<String>,
}

/// Earliest header occurrence in `text`, as (byte offset, header).
fn next_header(text: &str) -> Option<(usize, Header)> {
    Header::ALL
        .iter()
        .filter_map(|&header| text.find(header.literal()).map(|at| (at, header)))
        .min_by_key(|(at, _)| *at)
}

pub fn split_sections(text: &str) -> Sections {
    let mut state = ParserState::Preamble;
    let mut education = String::new();
    let mut experience = String::new();
    let mut skills = String::new();

    let mut append = |state: ParserState, chunk: &str| match state {
        ParserState::Preamble => {}
        ParserState::InEducation => education.push_str(chunk),
        ParserState::InExperience => experience.push_str(chunk),
        ParserState::InSkills => skills.push_str(chunk),
    };

    let mut rest = text;
    while let Some((at, header)) = next_header(rest) {
        append(state, &rest[..at]);
        match state.on_header(header) {
            Some(next) => state = next,
            None => append(state, header.literal()),
        }
        rest = &rest[at + header.literal().len()..];
    }
    append(state, rest);

    Sections {
        education: block_lines(&education),
        experience: block_lines(&experience),
        skills: block_lines(&skills),
    }
}

/// Trimmed, non-empty lines of a captured block, in document order.
fn block_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
