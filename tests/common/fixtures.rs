//! Scratch git repositories for backport tests
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Initial CHANGELOG content shared by every branch
pub const INITIAL_CHANGELOG: &str = "# Changelog\n";

/// Run a git command in `dir`, panicking on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
        .args(args)
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Run a git command in `dir`, returning whether it succeeded
pub fn git_ok(dir: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A bare origin plus a working clone, seeded for backport scenarios
///
/// `main` carries an initial commit (file.txt, CHANGELOG.md) followed by a
/// "feature" commit touching both files - the squashed merge commit of the
/// imaginary source PR. Maintenance branches fork from the initial commit;
/// conflicting ones additionally rewrite file.txt so the feature commit no
/// longer applies.
pub struct ScratchRepos {
    _tmp: TempDir,
    /// Bare repository acting as `origin`
    pub origin: PathBuf,
    /// Working clone the backports run against
    pub work: PathBuf,
    /// SHA of the feature commit on `main`
    pub feature_sha: String,
}

impl ScratchRepos {
    /// Build the fixture with the given maintenance branches
    pub fn setup(clean_bases: &[&str], conflicting_bases: &[&str]) -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let origin = tmp.path().join("origin.git");
        let work = tmp.path().join("work");
        fs::create_dir(&origin).unwrap();
        fs::create_dir(&work).unwrap();

        git(&origin, &["init", "--bare", "-b", "main"]);
        git(&work, &["init", "-b", "main"]);

        fs::write(work.join("file.txt"), "base\n").unwrap();
        fs::write(work.join("CHANGELOG.md"), INITIAL_CHANGELOG).unwrap();
        git(&work, &["add", "."]);
        git(&work, &["commit", "-m", "initial"]);
        git(&work, &["remote", "add", "origin", origin.to_str().unwrap()]);
        git(&work, &["push", "-u", "origin", "main"]);

        for &base in clean_bases {
            git(&work, &["switch", "-c", base]);
            git(&work, &["push", "-u", "origin", base]);
            git(&work, &["switch", "main"]);
        }

        for &base in conflicting_bases {
            git(&work, &["switch", "-c", base]);
            fs::write(work.join("file.txt"), format!("diverged on {base}\n")).unwrap();
            git(&work, &["commit", "-am", "diverge"]);
            git(&work, &["push", "-u", "origin", base]);
            git(&work, &["switch", "main"]);
        }

        fs::write(work.join("file.txt"), "feature\n").unwrap();
        fs::write(work.join("CHANGELOG.md"), format!("{INITIAL_CHANGELOG}- fix\n")).unwrap();
        git(&work, &["commit", "-am", "Fix bug (#42)"]);
        git(&work, &["push", "origin", "main"]);
        let feature_sha = git(&work, &["rev-parse", "HEAD"]);

        Self {
            _tmp: tmp,
            origin,
            work,
            feature_sha,
        }
    }

    /// Whether a branch exists on the origin
    pub fn branch_on_origin(&self, branch: &str) -> bool {
        git_ok(
            &self.origin,
            &["rev-parse", "--verify", &format!("refs/heads/{branch}")],
        )
    }

    /// Content of a file on a branch of the origin
    pub fn show_on_origin(&self, branch: &str, path: &str) -> String {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.origin)
            .args(["show", &format!("{branch}:{path}")])
            .output()
            .expect("failed to spawn git");
        assert!(
            output.status.success(),
            "git show {branch}:{path} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Commit message of the tip of a branch on the origin
    pub fn tip_message_on_origin(&self, branch: &str) -> String {
        git(&self.origin, &["log", "-1", "--format=%B", branch])
    }
}
