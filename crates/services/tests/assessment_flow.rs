use services::{ASSESSMENT_TIME_BUDGET_SECS, AdvanceOutcome, AssessmentFlow, Stage, TimerTick};
use vetting_core::model::{CompletionReason, Niche};
use vetting_core::time::fixed_clock;

fn flow_in_assessment(niche_key: &str) -> AssessmentFlow {
    let mut flow = AssessmentFlow::new(fixed_clock());
    flow.submit_contact("Ada Lovelace", "ada@example.com")
        .unwrap();
    assert!(flow.select_niche(niche_key));
    assert!(flow.start_assessment());
    assert_eq!(flow.stage(), Stage::Assessment);
    flow
}

#[test]
fn full_wizard_walk_reaches_results_with_an_exhaustive_summary() {
    let mut flow = flow_in_assessment("virtual-assistant");
    let total = flow.progress().unwrap().total;
    assert_eq!(total, 50);

    let mut steps = 0;
    loop {
        // forward motion is gated until the current question has text
        assert_eq!(flow.advance(), Some(AdvanceOutcome::Blocked));
        assert!(flow.answer_current("a considered response"));
        steps += 1;
        match flow.advance().unwrap() {
            AdvanceOutcome::Advanced => {}
            AdvanceOutcome::Completed => break,
            AdvanceOutcome::Blocked => panic!("answered question should not block"),
        }
    }

    assert_eq!(steps, total);
    assert_eq!(flow.stage(), Stage::Results);
    assert!(flow.session().is_none());

    let summary = flow.summary().unwrap();
    assert_eq!(summary.niche(), Niche::VirtualAssistant);
    assert_eq!(summary.reason(), CompletionReason::Finished);
    assert_eq!(summary.answered(), total);
    assert!(summary.is_exhaustive());
}

#[test]
fn timer_expiry_reaches_results_through_the_same_completion_path() {
    let mut flow = flow_in_assessment("frontend-dev");

    for _ in 0..3 {
        assert!(flow.answer_current("partial answer"));
        assert_eq!(flow.advance(), Some(AdvanceOutcome::Advanced));
    }

    let mut expirations = 0;
    for _ in 0..ASSESSMENT_TIME_BUDGET_SECS {
        match flow.tick() {
            Some(TimerTick::Expired) => expirations += 1,
            Some(TimerTick::Running(_)) => {}
            Some(TimerTick::Idle) | None => break,
        }
    }

    assert_eq!(expirations, 1);
    assert_eq!(flow.stage(), Stage::Results);
    assert!(flow.session().is_none());
    assert_eq!(flow.tick(), None);

    let summary = flow.summary().unwrap();
    assert_eq!(summary.reason(), CompletionReason::TimedOut);
    assert_eq!(summary.answered(), 3);
    assert_eq!(summary.total(), 50);
    assert!(!summary.is_exhaustive());
}

#[test]
fn progress_is_monotonic_across_the_whole_catalog_definition() {
    let mut flow = flow_in_assessment("backend-dev");
    let mut last = 0.0_f64;
    loop {
        let progress = flow.progress().unwrap();
        assert!(progress.fraction() >= last);
        assert!(progress.fraction() <= 1.0);
        last = progress.fraction();

        flow.answer_current("answer");
        if flow.advance() == Some(AdvanceOutcome::Completed) {
            break;
        }
    }
    assert!((last - 1.0).abs() < f64::EPSILON);
    assert_eq!(flow.stage(), Stage::Results);
}

#[test]
fn leaving_the_assessment_discards_state_and_a_restart_is_fresh() {
    let mut flow = flow_in_assessment("copywriting");
    assert!(flow.answer_current("draft one"));
    assert_eq!(flow.advance(), Some(AdvanceOutcome::Advanced));

    assert!(flow.back());
    assert_eq!(flow.stage(), Stage::Overview);

    assert!(flow.start_assessment());
    let progress = flow.progress().unwrap();
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.phase_index, 0);
    assert_eq!(progress.question_index, 0);
}
