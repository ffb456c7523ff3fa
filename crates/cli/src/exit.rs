use crm_jobs_domain::DomainError;
use crm_jobs_jobs::RunSummary;
use std::process::ExitCode;

pub const FAILURE: u8 = 1;
/// Data was changed but the audit log append failed.
pub const AUDIT_GAP: u8 = 3;

pub fn code_for_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<DomainError>() {
        Some(domain) if domain.is_audit_gap() => AUDIT_GAP,
        _ => FAILURE,
    }
}

/// Most severe code across all jobs of a run.
pub fn code_for_summary(summary: &RunSummary) -> u8 {
    if summary.has_audit_gap() {
        AUDIT_GAP
    } else if summary.succeeded() {
        0
    } else {
        FAILURE
    }
}

pub fn to_exit_code(code: u8) -> ExitCode {
    ExitCode::from(code)
}
