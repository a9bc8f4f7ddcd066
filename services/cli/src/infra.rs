use archwise::error::AppError;
use archwise::questionnaire::{unrecognized_options, QuestionnaireRecord};
use std::io::{BufReader, Write};
use std::path::Path;
use tracing::warn;

pub(crate) fn load_questionnaire(path: &Path) -> Result<QuestionnaireRecord, AppError> {
    let file = std::fs::File::open(path)?;
    let record: QuestionnaireRecord = serde_json::from_reader(BufReader::new(file))?;

    for option in unrecognized_options(&record) {
        warn!(
            file = %path.display(),
            field = option.field,
            value = %option.value,
            "selection not in the option catalog"
        );
    }

    Ok(record)
}

/// Writes to `path` when given, stdout otherwise.
pub(crate) fn write_output(path: Option<&Path>, contents: &str) -> Result<(), AppError> {
    match path {
        Some(path) => std::fs::write(path, contents)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
