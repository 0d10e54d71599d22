//! Fixture-driven codec suite.
//!
//! Each `tests/codec-tests/*.test` file is a JSON document holding decode/encode cases for one
//! codec. A case either names the canonical encoding its input must round-trip to, or the
//! error code its input must fail with.

use std::fs::File;

use glob::glob;
use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;

#[derive(Deserialize)]
struct Suite {
    tests: Vec<Case>,
}

#[derive(Deserialize)]
struct Case {
    description: String,
    /// "levelorder" (default) or "dense".
    #[serde(default)]
    codec: Option<String>,
    input: String,
    /// The canonical level-order encoding of the decoded tree.
    #[serde(default)]
    canonical: Option<String>,
    /// The expected error code, for inputs that must not decode.
    #[serde(default)]
    error: Option<String>,
}

fn run_case(case: Case) -> Result<(), Failed> {
    let decoded = match case.codec.as_deref().unwrap_or("levelorder") {
        "levelorder" => judgeio::levelorder::decode(&case.input),
        "dense" => judgeio::dense::decode(&case.input),
        other => return Err(format!("unknown codec {:?}", other).into()),
    };

    match (decoded, case.error) {
        (Err(err), Some(code)) => {
            if err.code() != code {
                return Err(format!(
                    "expected error {:?}, got {:?} ({})",
                    code,
                    err.code(),
                    err
                )
                .into());
            }
            Ok(())
        }
        (Err(err), None) => Err(format!("unexpected decode error: {}", err).into()),
        (Ok(_), Some(code)) => Err(format!("expected error {:?}, but decode succeeded", code).into()),
        (Ok(tree), None) => {
            let canonical = case
                .canonical
                .ok_or("case has neither \"canonical\" nor \"error\"")?;
            let encoded = judgeio::levelorder::encode(tree.as_deref());
            if encoded != canonical {
                return Err(format!("encoded {:?}, expected {:?}", encoded, canonical).into());
            }
            // The canonical form must be a fixed point of decode+encode and reproduce the
            // exact tree.
            let again = judgeio::levelorder::decode(&canonical)
                .map_err(|err| format!("canonical form did not decode: {}", err))?;
            if again != tree {
                return Err(format!(
                    "canonical form decoded to a different tree: {:?} != {:?}",
                    again, tree
                )
                .into());
            }
            Ok(())
        }
    }
}

fn main() {
    let args = Arguments::from_args();

    let mut trials = Vec::new();
    for entry in glob("tests/codec-tests/*.test").unwrap() {
        let path = entry.unwrap();
        let file_stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap()
            .to_owned();
        let suite: Suite = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        for case in suite.tests {
            let name = format!("{}::{}", file_stem, case.description);
            trials.push(Trial::test(name, move || run_case(case)));
        }
    }
    assert!(!trials.is_empty(), "no fixture files found");

    libtest_mimic::run(&args, trials).exit();
}
