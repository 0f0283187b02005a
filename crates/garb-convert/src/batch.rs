//! Batch conversion.

use std::path::{Path, PathBuf};

use crate::{convert_one, write_converted, Error, Options};

/// One successfully converted batch entry.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Outcome of a batch run. Every input path lands in exactly one of
/// `succeeded` or `failed`; successes already on disk are not rolled back
/// when a later item fails.
#[derive(Debug)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub succeeded: Vec<BatchItem>,
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_all_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert a list of files sequentially, writing results into
/// `output_dir`. A per-file failure is recorded and the batch moves on.
pub fn convert_batch(inputs: &[PathBuf], output_dir: &Path, options: &Options) -> BatchReport {
    convert_batch_with(inputs, output_dir, options, |_, _| {})
}

/// [`convert_batch`] with a per-item hook, called before each file is
/// processed. Progress UIs hang off this.
pub fn convert_batch_with<F>(
    inputs: &[PathBuf],
    output_dir: &Path,
    options: &Options,
    mut on_item: F,
) -> BatchReport
where
    F: FnMut(usize, &Path),
{
    let mut report = BatchReport {
        output_dir: output_dir.to_path_buf(),
        succeeded: Vec::new(),
        failed: Vec::new(),
    };

    for (index, input) in inputs.iter().enumerate() {
        on_item(index, input);

        let result = convert_one(input, options)
            .and_then(|converted| write_converted(output_dir, input, &converted));

        match result {
            Ok(output) => report.succeeded.push(BatchItem {
                input: input.clone(),
                output,
            }),
            Err(error) => report.failed.push((input.clone(), error)),
        }
    }

    report
}
