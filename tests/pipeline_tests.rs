use leadboard::data::sample_leads;
use leadboard::models::{ClosingDetails, Lead, LossReason, PipelineStage};
use leadboard::pipeline::{
    cancel_transition, confirm_transition, group_by_stage, request_transition, ConfirmationContext,
    PipelineError, PipelineState, Transition,
};

fn lead(id: &str, status: PipelineStage) -> Lead {
    let mut lead = Lead::new(format!("Lead {}", id), "1".to_string(), "Parque Norte".to_string());
    lead.id = id.to_string();
    lead.status = status;
    lead.ticket_uf = 3000.0;
    lead
}

fn column_ids(state: &PipelineState, stage: PipelineStage) -> Vec<String> {
    state.board().column(stage).iter().map(|l| l.id.clone()).collect()
}

#[test]
fn test_lost_confirmation_scenario() {
    let mut state = PipelineState::new(vec![lead("1", PipelineStage::New), lead("2", PipelineStage::Won)]);

    assert_eq!(column_ids(&state, PipelineStage::New), vec!["1"]);
    assert!(column_ids(&state, PipelineStage::InContact).is_empty());
    assert!(column_ids(&state, PipelineStage::MeetingScheduled).is_empty());
    assert_eq!(column_ids(&state, PipelineStage::Won), vec!["2"]);
    assert!(column_ids(&state, PipelineStage::Lost).is_empty());

    let transition = request_transition(&mut state, "1", PipelineStage::Lost).unwrap();
    assert_eq!(
        transition,
        Transition::PendingConfirmation(ConfirmationContext::Lost { lead_id: "1".to_string() })
    );
    assert_eq!(state.get("1").unwrap().status, PipelineStage::New);

    confirm_transition(&mut state, ClosingDetails::Lost { reason: LossReason::Price, notes: None }).unwrap();
    assert_eq!(state.get("1").unwrap().status, PipelineStage::Lost);
    assert!(state.pending().is_none());

    assert_eq!(column_ids(&state, PipelineStage::Lost), vec!["1"]);
    assert_eq!(column_ids(&state, PipelineStage::Won), vec!["2"]);
    assert!(column_ids(&state, PipelineStage::New).is_empty());
    assert!(column_ids(&state, PipelineStage::InContact).is_empty());
    assert!(column_ids(&state, PipelineStage::MeetingScheduled).is_empty());
}

#[test]
fn test_unknown_lead_leaves_collection_untouched() {
    let mut state = PipelineState::new(sample_leads());
    let before = state.leads().to_vec();

    let err = request_transition(&mut state, "999", PipelineStage::InContact).unwrap_err();
    assert_eq!(err, PipelineError::UnknownLead("999".to_string()));
    assert_eq!(state.leads(), before.as_slice());
    assert!(!state.is_awaiting_confirmation());
}

#[test]
fn test_open_moves_between_every_pair() {
    let open = [PipelineStage::New, PipelineStage::InContact, PipelineStage::MeetingScheduled];
    for from in open {
        for to in open {
            let mut state = PipelineState::new(vec![lead("a", from), lead("b", PipelineStage::InContact)]);
            let before = state.leads().to_vec();

            let transition = request_transition(&mut state, "a", to).unwrap();
            if from == to {
                assert_eq!(transition, Transition::Unchanged);
                assert_eq!(state.leads(), before.as_slice());
            } else {
                assert!(matches!(transition, Transition::Applied { .. }));
                let mut expected = before[0].clone();
                expected.status = to;
                assert_eq!(state.leads()[0], expected);
                assert_eq!(state.leads()[1], before[1]);
            }
            assert!(state.pending().is_none());
        }
    }
}

#[test]
fn test_won_then_cancel_then_won_again() {
    let mut state = PipelineState::new(sample_leads());
    let ticket = state.get("5").unwrap().ticket_uf;

    let transition = request_transition(&mut state, "5", PipelineStage::Won).unwrap();
    assert_eq!(
        transition,
        Transition::PendingConfirmation(ConfirmationContext::Won {
            lead_id: "5".to_string(),
            suggested_value_uf: ticket,
        })
    );
    assert_eq!(state.get("5").unwrap().status, PipelineStage::MeetingScheduled);

    cancel_transition(&mut state);
    assert_eq!(state.get("5").unwrap().status, PipelineStage::MeetingScheduled);

    request_transition(&mut state, "5", PipelineStage::Won).unwrap();
    let record = confirm_transition(
        &mut state,
        ClosingDetails::Won { closing_value_uf: ticket - 100.0, notes: Some("parking included".to_string()) },
    )
    .unwrap();
    assert_eq!(record.from, PipelineStage::MeetingScheduled);
    assert_eq!(state.get("5").unwrap().status, PipelineStage::Won);
    assert_eq!(state.closings(), &[record]);
}

#[test]
fn test_board_order_survives_moves() {
    let mut state = PipelineState::new(vec![
        lead("1", PipelineStage::InContact),
        lead("2", PipelineStage::New),
        lead("3", PipelineStage::InContact),
    ]);

    request_transition(&mut state, "2", PipelineStage::InContact).unwrap();
    // Source order, not move order
    assert_eq!(column_ids(&state, PipelineStage::InContact), vec!["1", "2", "3"]);
    assert_eq!(state.board(), group_by_stage(state.leads()));
}
