//! Property tests for the planner and engine over random boards and gestures

use kanban_reorder::{
    plan_move, resolve_hit, validate, Board, BoardEngine, Container, DragEvent, EngineConfig,
    Item, MovePlan,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

const MAX_CONTAINERS: usize = 5;
const MAX_ITEMS_PER_CONTAINER: usize = 5;
const MAX_STEPS: usize = 20;

fn build_board(sizes: &[usize]) -> Board {
    sizes
        .iter()
        .enumerate()
        .fold(Board::new(), |board, (c, &size)| {
            let container = (0..size).fold(
                Container::new(format!("container-{c}"), format!("Column {c}")),
                |container, i| container.with_item(Item::new(format!("item-{c}-{i}"), "card")),
            );
            board.with_container(container)
        })
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(0..=MAX_ITEMS_PER_CONTAINER, 1..=MAX_CONTAINERS)
        .prop_map(|sizes| build_board(&sizes))
}

/// Every id on the board plus ids that never resolve
fn candidates(board: &Board) -> Vec<Option<String>> {
    let mut ids: Vec<Option<String>> = board
        .containers
        .iter()
        .map(|c| Some(c.id.to_string()))
        .collect();
    ids.extend(board.item_ids().into_iter().map(|i| Some(i.to_string())));
    ids.push(Some("item-vanished".to_string()));
    ids.push(Some("container-vanished".to_string()));
    ids.push(Some("untagged".to_string()));
    ids.push(None);
    ids
}

fn item_set(board: &Board) -> BTreeSet<String> {
    board.item_ids().into_iter().map(|i| i.to_string()).collect()
}

fn container_set(board: &Board) -> BTreeSet<String> {
    board.containers.iter().map(|c| c.id.to_string()).collect()
}

proptest! {
    #[test]
    fn planner_conserves_items(
        board in board_strategy(),
        steps in prop::collection::vec((any::<usize>(), any::<usize>()), 0..MAX_STEPS),
    ) {
        let ids = candidates(&board);
        let items_before = item_set(&board);
        let containers_before = container_set(&board);
        let count_before = board.item_count();

        let mut current = board;
        for (a, o) in steps {
            let active = &ids[a % ids.len()];
            let over = &ids[o % ids.len()];
            let source = resolve_hit(&current, active.as_deref());
            let target = resolve_hit(&current, over.as_deref());
            if let MovePlan::Apply { board, .. } = plan_move(&current, &source, &target) {
                current = board;
            }
            prop_assert!(validate(&current).is_ok());
            prop_assert_eq!(current.item_count(), count_before);
        }

        prop_assert_eq!(item_set(&current), items_before);
        prop_assert_eq!(container_set(&current), containers_before);
    }

    #[test]
    fn dropping_on_self_changes_nothing(board in board_strategy(), pick in any::<usize>()) {
        let ids = candidates(&board);
        let id = &ids[pick % ids.len()];
        let hit = resolve_hit(&board, id.as_deref());
        let plan = plan_move(&board, &hit, &hit);
        prop_assert!(plan.is_noop());
        prop_assert_eq!(plan.board_or(&board), &board);
    }

    #[test]
    fn container_identity_survives_moves(
        board in board_strategy(),
        steps in prop::collection::vec((any::<usize>(), any::<usize>()), 0..MAX_STEPS),
    ) {
        let ids = candidates(&board);
        let titles: Vec<(String, String)> = board
            .containers
            .iter()
            .map(|c| (c.id.to_string(), c.title.clone()))
            .collect();

        let mut current = board;
        for (a, o) in steps {
            let source = resolve_hit(&current, ids[a % ids.len()].as_deref());
            let target = resolve_hit(&current, ids[o % ids.len()].as_deref());
            if let MovePlan::Apply { board, .. } = plan_move(&current, &source, &target) {
                current = board;
            }
        }

        for (id, title) in titles {
            let container = current
                .containers
                .iter()
                .find(|c| c.id.as_str() == id)
                .expect("container lost");
            prop_assert_eq!(&container.title, &title);
        }
    }

    #[test]
    fn engine_gestures_preserve_invariants(
        board in board_strategy(),
        gestures in prop::collection::vec(
            (any::<usize>(), prop::collection::vec(any::<usize>(), 0..6), any::<usize>(), any::<bool>()),
            0..8,
        ),
    ) {
        let ids = candidates(&board);
        let items_before = item_set(&board);
        let mut engine = BoardEngine::new(board, EngineConfig::default()).unwrap();

        for (active, moves, end, cancel) in gestures {
            if let Some(active) = &ids[active % ids.len()] {
                engine.handle_drag(DragEvent::start(active.clone()));
            }
            for over in moves {
                engine.handle_drag(DragEvent::Move { over: ids[over % ids.len()].clone() });
            }
            if cancel {
                engine.handle_drag(DragEvent::Cancel);
            } else {
                engine.handle_drag(DragEvent::End { over: ids[end % ids.len()].clone() });
            }

            prop_assert!(!engine.is_dragging());
            prop_assert!(validate(engine.board()).is_ok());
            prop_assert_eq!(item_set(engine.board()), items_before.clone());
        }
    }
}
