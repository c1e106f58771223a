use tracing::debug;

use super::drag_controller::DragEvent;
use crate::core::config::DEFAULT_ACTIVATION_DISTANCE;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: PointerPosition) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Where a single pointer gesture is in its life.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Released,
    /// Pointer is down on a card but has not travelled far enough to lift it.
    Pressed { task_id: String, origin: PointerPosition },
    /// Drag is live; `hovered` is the last drop id reported as `Over`.
    Active { hovered: Option<String> },
}

/// Turns raw pointer input into drag lifecycle events.
///
/// A press only becomes a drag once the pointer moves strictly farther than
/// `activation_distance` from where it went down, so plain clicks on a card
/// never start a drag. Activation is followed by an `Over` for whatever is
/// under the pointer at that moment; after that `Over` is emitted only when
/// the drop id under the pointer changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSensor {
    activation_distance: f64,
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl PointerSensor {
    pub fn new(activation_distance: f64) -> Self {
        Self { activation_distance }
    }

    pub fn press(&self, phase: &mut GesturePhase, task_id: String, at: PointerPosition) {
        if matches!(phase, GesturePhase::Active { .. }) {
            return;
        }
        *phase = GesturePhase::Pressed { task_id, origin: at };
    }

    pub fn motion(
        &self,
        phase: &mut GesturePhase,
        at: PointerPosition,
        hit: Option<String>,
    ) -> Vec<DragEvent> {
        match phase {
            GesturePhase::Released => Vec::new(),
            GesturePhase::Pressed { task_id, origin } => {
                if origin.distance_to(at) <= self.activation_distance {
                    return Vec::new();
                }
                debug!(task_id = %task_id, "pointer sensor activated");
                let mut events = vec![DragEvent::Start { task_id: task_id.clone(), over: None }];
                if hit.is_some() {
                    events.push(DragEvent::Over(hit.clone()));
                }
                *phase = GesturePhase::Active { hovered: hit };
                events
            }
            GesturePhase::Active { hovered } => {
                if *hovered == hit {
                    return Vec::new();
                }
                *hovered = hit.clone();
                vec![DragEvent::Over(hit)]
            }
        }
    }

    pub fn release(&self, phase: &mut GesturePhase, hit: Option<String>) -> Option<DragEvent> {
        match std::mem::take(phase) {
            GesturePhase::Active { .. } => Some(DragEvent::End(hit)),
            GesturePhase::Pressed { .. } | GesturePhase::Released => None,
        }
    }

    pub fn cancel(&self, phase: &mut GesturePhase) -> Option<DragEvent> {
        match std::mem::take(phase) {
            GesturePhase::Active { .. } => Some(DragEvent::Cancel),
            GesturePhase::Pressed { .. } | GesturePhase::Released => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::kanban::services::drag_controller::{dispatch, DragState};
    use crate::models::board::seed_board;
    use crate::models::Board;
    use pretty_assertions::assert_eq;

    fn at(x: f64, y: f64) -> PointerPosition {
        PointerPosition::new(x, y)
    }

    fn hit(id: &str) -> Option<String> {
        Some(id.to_string())
    }

    fn pressed(sensor: &PointerSensor, task_id: &str) -> GesturePhase {
        let mut phase = GesturePhase::Released;
        sensor.press(&mut phase, task_id.to_string(), at(100.0, 100.0));
        phase
    }

    fn start(task_id: &str) -> DragEvent {
        DragEvent::Start { task_id: task_id.to_string(), over: None }
    }

    #[test]
    fn small_movements_do_not_start_a_drag() {
        let sensor = PointerSensor::default();
        let mut phase = pressed(&sensor, "1");

        assert!(sensor.motion(&mut phase, at(105.0, 100.0), hit("1")).is_empty());
        // exactly on the threshold is still a click
        assert!(sensor.motion(&mut phase, at(108.0, 100.0), hit("1")).is_empty());
        assert!(matches!(phase, GesturePhase::Pressed { .. }));
    }

    #[test]
    fn threshold_is_euclidean() {
        let sensor = PointerSensor::default();
        let mut phase = pressed(&sensor, "1");
        // 6-6 diagonal travels ~8.49px
        let events = sensor.motion(&mut phase, at(106.0, 106.0), hit("todo"));
        assert_eq!(events, vec![start("1"), DragEvent::Over(hit("todo"))]);
    }

    #[test]
    fn activation_over_nothing_only_starts() {
        let sensor = PointerSensor::default();
        let mut phase = pressed(&sensor, "1");
        assert_eq!(sensor.motion(&mut phase, at(150.0, 100.0), None), vec![start("1")]);
        assert_eq!(phase, GesturePhase::Active { hovered: None });
    }

    #[test]
    fn click_release_emits_nothing() {
        let sensor = PointerSensor::default();
        let mut phase = pressed(&sensor, "1");
        assert_eq!(sensor.release(&mut phase, hit("1")), None);
        assert_eq!(phase, GesturePhase::Released);
    }

    #[test]
    fn over_is_emitted_only_when_the_target_changes() {
        let sensor = PointerSensor::default();
        let mut phase = pressed(&sensor, "3");
        sensor.motion(&mut phase, at(120.0, 100.0), hit("inprogress"));

        assert!(sensor.motion(&mut phase, at(130.0, 100.0), hit("inprogress")).is_empty());
        assert_eq!(
            sensor.motion(&mut phase, at(300.0, 100.0), hit("review")),
            vec![DragEvent::Over(hit("review"))]
        );
        assert_eq!(sensor.motion(&mut phase, at(900.0, 100.0), None), vec![DragEvent::Over(None)]);
        assert!(sensor.motion(&mut phase, at(901.0, 100.0), None).is_empty());
    }

    #[test]
    fn release_while_active_ends_the_drag() {
        let sensor = PointerSensor::default();
        let mut phase = pressed(&sensor, "3");
        sensor.motion(&mut phase, at(150.0, 100.0), hit("4"));

        assert_eq!(sensor.release(&mut phase, hit("4")), Some(DragEvent::End(hit("4"))));
        assert_eq!(phase, GesturePhase::Released);
    }

    #[test]
    fn cancel_only_reports_live_drags() {
        let sensor = PointerSensor::default();
        let mut phase = pressed(&sensor, "2");
        assert_eq!(sensor.cancel(&mut phase), None);

        let mut phase = pressed(&sensor, "2");
        sensor.motion(&mut phase, at(150.0, 150.0), None);
        assert_eq!(sensor.cancel(&mut phase), Some(DragEvent::Cancel));
        assert_eq!(sensor.cancel(&mut phase), None);
    }

    #[test]
    fn press_during_a_live_drag_is_ignored() {
        let sensor = PointerSensor::default();
        let mut phase = pressed(&sensor, "2");
        sensor.motion(&mut phase, at(150.0, 150.0), None);

        sensor.press(&mut phase, "4".to_string(), at(0.0, 0.0));
        assert_eq!(phase, GesturePhase::Active { hovered: None });
    }

    #[test]
    fn zero_distance_activates_on_any_movement() {
        let sensor = PointerSensor::new(0.0);
        let mut phase = pressed(&sensor, "5");
        assert!(sensor.motion(&mut phase, at(100.0, 100.0), None).is_empty());
        assert!(!sensor.motion(&mut phase, at(100.5, 100.0), None).is_empty());
    }

    /// Pointer input fed through the sensor and then the drag state machine.
    enum Input {
        Press(&'static str, f64, f64),
        Move(f64, f64, Option<&'static str>),
        Release(Option<&'static str>),
        Cancel,
    }

    fn gesture(board: &mut Board, inputs: Vec<Input>) -> DragState {
        let sensor = PointerSensor::default();
        let mut phase = GesturePhase::Released;
        let mut state = DragState::Idle;
        for input in inputs {
            let events = match input {
                Input::Press(task_id, x, y) => {
                    sensor.press(&mut phase, task_id.to_string(), at(x, y));
                    Vec::new()
                }
                Input::Move(x, y, id) => sensor.motion(&mut phase, at(x, y), id.map(str::to_string)),
                Input::Release(id) => sensor.release(&mut phase, id.map(str::to_string)).into_iter().collect(),
                Input::Cancel => sensor.cancel(&mut phase).into_iter().collect(),
            };
            for event in events {
                state = dispatch(state, event, board);
            }
        }
        state
    }

    #[test]
    fn flick_straight_onto_another_column_moves_the_task_there() {
        let mut board = seed_board();
        let state = gesture(
            &mut board,
            vec![
                Input::Press("1", 100.0, 100.0),
                Input::Move(400.0, 100.0, Some("done")),
                Input::Move(405.0, 100.0, Some("done")),
                Input::Move(410.0, 100.0, Some("done")),
            ],
        );
        assert_eq!(state.active_id(), Some("1"));
        assert_eq!(board.task("1").unwrap().column_id, "done");

        let state = dispatch(state, DragEvent::End(hit("done")), &mut board);
        assert_eq!(state, DragState::Idle);
        assert_eq!(board.task("1").unwrap().column_id, "done");
    }

    #[test]
    fn hovering_a_column_mid_gesture_moves_the_task_before_release() {
        let mut board = seed_board();
        let state = gesture(
            &mut board,
            vec![
                Input::Press("1", 100.0, 100.0),
                Input::Move(104.0, 100.0, Some("1")),
                Input::Move(120.0, 100.0, Some("1")),
                Input::Move(350.0, 100.0, Some("inprogress")),
            ],
        );
        assert!(state.is_dragging());
        assert_eq!(board.task("1").unwrap().column_id, "inprogress");
    }

    #[test]
    fn dropping_task_3_on_task_4_takes_its_slot() {
        let mut board = seed_board();
        let state = gesture(
            &mut board,
            vec![
                Input::Press("3", 400.0, 100.0),
                Input::Move(420.0, 100.0, Some("3")),
                Input::Move(700.0, 100.0, Some("4")),
                Input::Release(Some("4")),
            ],
        );
        assert_eq!(state, DragState::Idle);
        let order: Vec<&str> = board.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["1", "2", "4", "3", "5"]);
        assert_eq!(board.task("3").unwrap().column_id, "review");
    }

    #[test]
    fn cancelled_gesture_leaves_the_column_alone() {
        let mut board = seed_board();
        let todo_before: Vec<String> = board.tasks_in_column("todo").map(|t| t.id.clone()).collect();
        let state = gesture(
            &mut board,
            vec![
                Input::Press("2", 100.0, 200.0),
                Input::Move(100.0, 230.0, Some("2")),
                Input::Cancel,
            ],
        );
        assert_eq!(state, DragState::Idle);
        let todo_after: Vec<String> = board.tasks_in_column("todo").map(|t| t.id.clone()).collect();
        assert_eq!(todo_after, todo_before);
    }

    #[test]
    fn click_without_travel_never_touches_the_board() {
        let mut board = seed_board();
        let before = board.clone();
        let state = gesture(
            &mut board,
            vec![
                Input::Press("4", 100.0, 100.0),
                Input::Move(103.0, 102.0, Some("done")),
                Input::Release(Some("done")),
            ],
        );
        assert_eq!(state, DragState::Idle);
        assert_eq!(board, before);
    }
}
