use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nba_scores::fixtures;
use nba_scores::status::classify;
use nba_scores::tui::action::Action;
use nba_scores::tui::effects::Effect;
use nba_scores::tui::reducer::reduce;
use nba_scores::tui::state::ViewState;
use nba_scores::types::{ApiResponse, GameDate};

fn bench_date() -> GameDate {
    GameDate::from_ymd(2024, 11, 20).unwrap()
}

/// Issue a refresh and answer it with the fixture games
fn settled_state() -> ViewState {
    let (state, effect) = reduce(ViewState::new(bench_date()), Action::Refresh);
    match effect {
        Effect::FetchGames(request) => {
            let games = fixtures::create_mock_games(request.date);
            reduce(state, Action::GamesLoaded(request, Ok(ApiResponse::ok(games)))).0
        }
        other => panic!("Expected FetchGames, got {:?}", other),
    }
}

fn bench_reducer_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("reducer");

    group.bench_function("date_change_round_trip", |b| {
        b.iter(|| {
            let (state, effect) = reduce(settled_state(), Action::ShiftDate(1));
            if let Effect::FetchGames(request) = effect {
                let games = fixtures::create_mock_games(request.date);
                black_box(reduce(state, Action::GamesLoaded(request, Ok(ApiResponse::ok(games)))));
            }
        });
    });

    group.bench_function("select_next", |b| {
        let state = settled_state();
        b.iter(|| {
            black_box(reduce(state.clone(), Action::SelectNext));
        });
    });

    group.bench_function("toggle_box_score", |b| {
        let state = settled_state();
        let game_id = state.game_list().unwrap()[1].id.clone();
        b.iter(|| {
            black_box(reduce(state.clone(), Action::ToggleBoxScore(game_id.clone())));
        });
    });

    group.bench_function("stale_response_drop", |b| {
        let state = settled_state();
        let (state, effect) = reduce(state, Action::Refresh);
        let stale = match effect {
            Effect::FetchGames(request) => request,
            other => panic!("Expected FetchGames, got {:?}", other),
        };
        let (state, _) = reduce(state, Action::GamesLoaded(stale.clone(), Err("timeout".to_string())));
        let (state, _) = reduce(state, Action::Refresh);
        let late = ApiResponse::ok(fixtures::create_mock_games(stale.date));
        b.iter(|| {
            black_box(reduce(state.clone(), Action::GamesLoaded(stale.clone(), Ok(late.clone()))));
        });
    });

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let games = fixtures::create_mock_games(bench_date()).games;
    let mut group = c.benchmark_group("classification");

    group.bench_function("classify_fixture_games", |b| {
        b.iter(|| {
            for game in &games {
                black_box(classify(black_box(game)));
            }
        });
    });

    group.bench_function("matchup_and_score_line", |b| {
        b.iter(|| {
            for game in &games {
                black_box((game.matchup(), game.score_line()));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reducer_dispatch, bench_classification);
criterion_main!(benches);
