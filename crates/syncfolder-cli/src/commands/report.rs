//! Human-readable rendering of sync reports

use std::fmt::Write;

use colored::Colorize;
use syncfolder_core::SyncReport;

/// Render a report the way it is printed to the terminal.
pub fn render_report(report: &SyncReport) -> String {
    let plan = &report.plan;
    let mut out = String::new();
    let del = if plan.dry_run { "would del" } else { "del" };

    let _ = writeln!(
        out,
        "{} Syncing {} folder with {}{}",
        ">>".blue().bold(),
        plan.folder.as_str().yellow().bold(),
        plan.source.as_str().yellow().bold(),
        report
            .target
            .as_deref()
            .map(|t| format!(" ({})", t.dimmed()))
            .unwrap_or_default()
    );
    let _ = writeln!(out);

    for file in &plan.files {
        let _ = writeln!(out, "{} {}", del.red().bold(), file.path.as_str().cyan());
    }
    for folder in &plan.folders {
        let _ = writeln!(out, "{} {}", del.red().bold(), folder.path.as_str().yellow());
    }
    for folder in &plan.skipped_folders {
        let _ = writeln!(
            out,
            "{} {} {}",
            "skip".yellow().bold(),
            folder.path.as_str().yellow(),
            "(not empty)".dimmed()
        );
    }

    if plan.is_empty() {
        let _ = writeln!(
            out,
            "{} No compressed files without an original equivalent. Nothing was deleted.",
            "OK".green().bold()
        );
    } else {
        let _ = writeln!(
            out,
            "    {}",
            "These files/folders have no equivalent in the original folder".dimmed()
        );
        let _ = writeln!(out, "------");
    }

    let verb = if plan.dry_run { "to delete" } else { "deleted" };
    let _ = writeln!(out, "{} {}:   {}", "Files".cyan().bold(), verb, plan.file_count());
    let _ = writeln!(out, "{} {}: {}", "Folders".yellow().bold(), verb, plan.folder_count());

    if let Some(signatures) = &report.signatures {
        let label = if signatures.outcome.rewritten || !plan.dry_run {
            "pruned"
        } else {
            "to prune"
        };
        let _ = writeln!(
            out,
            "{} {}: {} ({})",
            "Signatures".magenta().bold(),
            label,
            signatures.outcome.removed,
            signatures.path.as_str().dimmed()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use syncfolder_core::{
        DeletedFile, DeletedFolder, DeletionPlan, PruneOutcome, SignatureReport,
    };

    fn report(dry_run: bool) -> SyncReport {
        let mut plan = DeletionPlan::new("assets/img".into(), "public/img".into(), dry_run);
        plan.files.push(DeletedFile {
            path: "public/img/dog.jpg".into(),
            key: "dog.jpg".into(),
            source_path: "assets/img/dog.jpg".into(),
        });
        plan.folders.push(DeletedFolder {
            path: "public/img/old".into(),
            key: "old".into(),
        });
        SyncReport {
            target: Some("images".into()),
            plan,
            signatures: Some(SignatureReport {
                path: "assets/img/tinypng.json".into(),
                outcome: PruneOutcome {
                    removed: 1,
                    rewritten: !dry_run,
                },
            }),
        }
    }

    #[test]
    fn snapshot_report_with_deletions() {
        colored::control::set_override(false);
        insta::assert_snapshot!(render_report(&report(false)), @r###"
        >> Syncing public/img folder with assets/img (images)

        del public/img/dog.jpg
        del public/img/old
            These files/folders have no equivalent in the original folder
        ------
        Files deleted:   1
        Folders deleted: 1
        Signatures pruned: 1 (assets/img/tinypng.json)
        "###);
    }

    #[test]
    fn snapshot_dry_run_report() {
        colored::control::set_override(false);
        insta::assert_snapshot!(render_report(&report(true)), @r###"
        >> Syncing public/img folder with assets/img (images)

        would del public/img/dog.jpg
        would del public/img/old
            These files/folders have no equivalent in the original folder
        ------
        Files to delete:   1
        Folders to delete: 1
        Signatures to prune: 1 (assets/img/tinypng.json)
        "###);
    }

    #[test]
    fn empty_report_confirms_nothing_deleted() {
        colored::control::set_override(false);
        let report = SyncReport {
            target: None,
            plan: DeletionPlan::new("a".into(), "b".into(), false),
            signatures: None,
        };

        let text = render_report(&report);

        assert!(text.contains("Nothing was deleted."));
        assert!(text.contains("Files deleted:   0"));
        assert!(text.contains("Folders deleted: 0"));
    }
}
