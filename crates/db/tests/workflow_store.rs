//! Store-level tests for experiments, outcomes, and reflections.

use assert_matches::assert_matches;
use echoroom_core::error::CoreError;
use echoroom_core::idea::{IdeaStatus, StateTransition};
use echoroom_core::outcome::OutcomeResult;
use echoroom_db::models::experiment::{CreateExperiment, NewExperiment};
use echoroom_db::models::idea::{CreateIdea, Idea};
use echoroom_db::models::outcome::CreateOutcome;
use echoroom_db::repositories::{ExperimentRepo, IdeaRepo, OutcomeRepo, ReflectionRepo};
use echoroom_db::{create_pool, Store};

async fn idea_in(store: &Store, target: IdeaStatus) -> Idea {
    let mut idea = IdeaRepo::create(
        store,
        "author",
        &CreateIdea {
            title: "Shorter standups".into(),
            description: "Cap standups at ten minutes".into(),
        },
    )
    .await;
    let path: &[IdeaStatus] = match target {
        IdeaStatus::Approved => &[
            IdeaStatus::Submitted,
            IdeaStatus::UnderReview,
            IdeaStatus::Approved,
        ],
        IdeaStatus::Submitted => &[IdeaStatus::Submitted],
        IdeaStatus::Draft => &[],
        other => panic!("helper does not support {other}"),
    };
    for &status in path {
        idea = IdeaRepo::transition(
            store,
            &StateTransition {
                idea_id: idea.id.clone(),
                from_version: idea.version,
                target_status: status,
            },
        )
        .await
        .unwrap();
    }
    idea
}

fn experiment_input() -> NewExperiment {
    CreateExperiment {
        title: "Timer trial".into(),
        hypothesis: "Standups finish on time".into(),
        start_date: "2024-03-01".into(),
        end_date: "2024-03-15".into(),
    }
    .validate()
    .unwrap()
}

#[tokio::test]
async fn approved_idea_can_be_promoted() {
    let store = create_pool();
    let idea = idea_in(&store, IdeaStatus::Approved).await;

    let experiment = ExperimentRepo::create(&store, &idea.id, "lead", experiment_input())
        .await
        .unwrap();
    assert_eq!(experiment.idea_id, idea.id);
    assert_eq!(experiment.created_by, "lead");
    assert_eq!(experiment.start_date.to_string(), "2024-03-01");

    let fetched = ExperimentRepo::get(&store, &experiment.id).await.unwrap();
    assert_eq!(fetched, experiment);

    let listed = ExperimentRepo::list_for_idea(&store, &idea.id).await.unwrap();
    assert_eq!(listed, vec![experiment]);
}

#[tokio::test]
async fn promotion_does_not_touch_the_idea() {
    let store = create_pool();
    let idea = idea_in(&store, IdeaStatus::Approved).await;
    ExperimentRepo::create(&store, &idea.id, "lead", experiment_input())
        .await
        .unwrap();
    assert_eq!(IdeaRepo::get(&store, &idea.id).await.unwrap(), idea);
}

#[tokio::test]
async fn unapproved_idea_cannot_be_promoted() {
    let store = create_pool();
    for status in [IdeaStatus::Draft, IdeaStatus::Submitted] {
        let idea = idea_in(&store, status).await;
        assert_matches!(
            ExperimentRepo::create(&store, &idea.id, "lead", experiment_input()).await,
            Err(CoreError::Conflict(_))
        );
    }
}

#[tokio::test]
async fn promotion_of_unknown_idea_is_not_found() {
    let store = create_pool();
    assert_matches!(
        ExperimentRepo::create(&store, "ghost", "lead", experiment_input()).await,
        Err(CoreError::NotFound { entity: "Idea", .. })
    );
    assert_matches!(
        ExperimentRepo::list_for_idea(&store, "ghost").await,
        Err(CoreError::NotFound { .. })
    );
}

#[tokio::test]
async fn experiment_dto_rejects_inverted_dates() {
    let input = CreateExperiment {
        title: "Timer trial".into(),
        hypothesis: "Standups finish on time".into(),
        start_date: "2024-03-15".into(),
        end_date: "2024-03-01".into(),
    };
    assert_matches!(input.validate(), Err(CoreError::Validation(_)));
}

#[tokio::test]
async fn one_outcome_per_experiment() {
    let store = create_pool();
    let idea = idea_in(&store, IdeaStatus::Approved).await;
    let experiment = ExperimentRepo::create(&store, &idea.id, "lead", experiment_input())
        .await
        .unwrap();

    assert_eq!(
        OutcomeRepo::find_for_experiment(&store, &experiment.id)
            .await
            .unwrap(),
        None
    );

    let input = CreateOutcome {
        result: "Mixed".into(),
        notes: Some("Half the teams adopted it".into()),
    }
    .validate()
    .unwrap();
    let outcome = OutcomeRepo::create(&store, &experiment.id, "lead", input.clone())
        .await
        .unwrap();
    assert_eq!(outcome.result, OutcomeResult::Mixed);
    assert_eq!(
        OutcomeRepo::find_for_experiment(&store, &experiment.id)
            .await
            .unwrap(),
        Some(outcome.clone())
    );
    assert_eq!(OutcomeRepo::get(&store, &outcome.id).await.unwrap(), outcome);

    assert_matches!(
        OutcomeRepo::create(&store, &experiment.id, "lead", input).await,
        Err(CoreError::Conflict(_))
    );
}

#[tokio::test]
async fn outcome_dto_requires_exact_result() {
    let input = CreateOutcome {
        result: "success".into(),
        notes: None,
    };
    assert_matches!(input.validate(), Err(CoreError::Validation(_)));
}

#[tokio::test]
async fn outcome_for_unknown_experiment_is_not_found() {
    let store = create_pool();
    let input = CreateOutcome {
        result: "Failed".into(),
        notes: None,
    }
    .validate()
    .unwrap();
    assert_matches!(
        OutcomeRepo::create(&store, "ghost", "lead", input).await,
        Err(CoreError::NotFound {
            entity: "Experiment",
            ..
        })
    );
}

#[tokio::test]
async fn reflections_attach_to_outcomes_in_order() {
    let store = create_pool();
    let idea = idea_in(&store, IdeaStatus::Approved).await;
    let experiment = ExperimentRepo::create(&store, &idea.id, "lead", experiment_input())
        .await
        .unwrap();
    let outcome = OutcomeRepo::create(
        &store,
        &experiment.id,
        "lead",
        CreateOutcome {
            result: "Success".into(),
            notes: None,
        }
        .validate()
        .unwrap(),
    )
    .await
    .unwrap();

    let first = ReflectionRepo::create(&store, &outcome.id, "a", "  We should keep the timer.  ")
        .await
        .unwrap();
    let second = ReflectionRepo::create(&store, &outcome.id, "b", "Async updates worked better.")
        .await
        .unwrap();
    assert_eq!(first.content, "We should keep the timer.");

    let listed = ReflectionRepo::list_for_outcome(&store, &outcome.id)
        .await
        .unwrap();
    assert_eq!(listed, vec![first.clone(), second]);
    assert_eq!(ReflectionRepo::get(&store, &first.id).await.unwrap(), first);

    assert_matches!(
        ReflectionRepo::create(&store, "ghost", "a", "Long enough content here").await,
        Err(CoreError::NotFound { entity: "Outcome", .. })
    );
}
