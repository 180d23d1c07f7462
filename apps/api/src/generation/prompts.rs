// All LLM prompt constants for the Generation module.

/// Cover letter prompt template.
/// Replace: {name}, {email}, {phone}, {education}, {experience}, {skills}, {job_description}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"I need a cover letter based on the candidate's CV and the job description provided. The letter should emphasize the candidate's relevant skills, experience, and achievements while tailoring the content to the requirements of the job. Below are the details:

CV:
Name: {name}
Email: {email}
Phone: {phone}

Education:
{education}

Experience:
{experience}

Skills:
{skills}

Job Description:
{job_description}
"#;

/// Rendered in place of the name when the recognizer found no PERSON entity.
pub const UNKNOWN_NAME: &str = "Not provided";

/// Separator used to flatten section lines into one prompt line.
pub const LIST_SEPARATOR: &str = ", ";
