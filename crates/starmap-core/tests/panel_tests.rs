// Host-side tests for the info panel state machine.
// A recording DOM stands in for the browser and applies the emitted commands.

use rand::prelude::*;
use starmap_core::*;

#[derive(Default)]
struct FakeDom {
    attached: Vec<PoiId>,
    max_attached: usize,
    mounted: Vec<PoiId>,
    pending: Vec<AnimationTicket>,
}

impl FakeDom {
    fn apply(&mut self, cmds: PanelCommands) {
        for cmd in cmds {
            match cmd {
                PanelCommand::RemoveStray => self.attached.clear(),
                PanelCommand::Mount { poi, .. } => {
                    self.attached.push(poi);
                    self.mounted.push(poi);
                }
                PanelCommand::Unmount => {
                    self.attached.pop();
                }
                PanelCommand::ArmTimeout { ticket, .. } => self.pending.push(ticket),
                PanelCommand::CancelTimeout { ticket } => self.pending.retain(|t| *t != ticket),
                PanelCommand::BeginClose { .. }
                | PanelCommand::SetSheetOffset(_)
                | PanelCommand::SpringBack => {}
            }
            self.max_attached = self.max_attached.max(self.attached.len());
        }
    }

    /// Let the browser finish whatever animation is in flight.
    fn finish(&mut self, panel: &mut InfoPanel) -> bool {
        match self.pending.first().copied() {
            Some(t) => {
                let cmds = panel.animation_finished(t);
                self.apply(cmds);
                true
            }
            None => false,
        }
    }

    fn settle(&mut self, panel: &mut InfoPanel) {
        for _ in 0..16 {
            if !self.finish(panel) {
                break;
            }
        }
    }
}

fn desktop_panel() -> InfoPanel {
    InfoPanel::new(StarMapConfig::default().panel, 1280.0)
}

#[test]
fn never_more_than_one_panel_attached() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut panel = desktop_panel();
        let mut dom = FakeDom::default();
        for _ in 0..60 {
            match rng.gen_range(0..5) {
                0 | 1 => {
                    let cmds = panel.request(PoiId(rng.gen_range(0..4)));
                    dom.apply(cmds);
                }
                2 => {
                    let cmds = panel.close();
                    dom.apply(cmds);
                }
                3 => {
                    dom.finish(&mut panel);
                }
                _ => {
                    if let Some(t) = dom.pending.first().copied() {
                        let cmds = panel.animation_timed_out(t);
                        dom.apply(cmds);
                    }
                }
            }
            assert!(dom.attached.len() <= 1);
        }
        dom.settle(&mut panel);
        assert!(dom.max_attached <= 1);
        assert!(!panel.is_animating());
        assert_eq!(dom.attached.len(), usize::from(panel.current().is_some()));
    }
}

#[test]
fn second_close_is_a_noop() {
    let mut panel = desktop_panel();
    let mut dom = FakeDom::default();
    dom.apply(panel.request(PoiId(0)));
    dom.settle(&mut panel);
    dom.apply(panel.close());
    dom.settle(&mut panel);
    assert_eq!(panel.state(), PanelState::Closed);
    assert!(panel.close().is_empty());
    assert_eq!(panel.state(), PanelState::Closed);
}

#[test]
fn request_during_open_shows_latest() {
    let mut panel = desktop_panel();
    let mut dom = FakeDom::default();
    dom.apply(panel.request(PoiId(0)));
    dom.apply(panel.request(PoiId(1)));
    assert_eq!(panel.queued(), Some(PoiId(1)));
    dom.settle(&mut panel);
    assert_eq!(
        panel.state(),
        PanelState::Open {
            poi: PoiId(1),
            layout: PanelLayout::Floating
        }
    );
    assert_eq!(dom.attached, vec![PoiId(1)]);
    assert_eq!(dom.mounted, vec![PoiId(0), PoiId(1)]);
}

#[test]
fn queue_slot_is_last_write_wins() {
    let mut panel = desktop_panel();
    let mut dom = FakeDom::default();
    dom.apply(panel.request(PoiId(0)));
    dom.settle(&mut panel);
    dom.apply(panel.request(PoiId(1)));
    dom.apply(panel.request(PoiId(2)));
    dom.apply(panel.request(PoiId(3)));
    dom.settle(&mut panel);
    assert_eq!(panel.current(), Some(PoiId(3)));
    assert_eq!(dom.mounted, vec![PoiId(0), PoiId(3)]);
}

#[test]
fn explicit_close_keeps_queued_request() {
    let mut panel = desktop_panel();
    let mut dom = FakeDom::default();
    dom.apply(panel.request(PoiId(0)));
    dom.settle(&mut panel);
    dom.apply(panel.request(PoiId(2)));
    assert!(panel.close().is_empty());
    dom.settle(&mut panel);
    assert_eq!(panel.current(), Some(PoiId(2)));
}

#[test]
fn close_before_open_completes_reaches_closed() {
    let mut panel = desktop_panel();
    let mut dom = FakeDom::default();
    dom.apply(panel.request(PoiId(0)));
    let open_ticket = dom.pending[0];
    dom.apply(panel.close());
    // the open timer was cancelled in favour of the close timer
    assert!(!dom.pending.contains(&open_ticket));
    // a late transitionend from the open animation changes nothing
    assert!(panel.animation_finished(open_ticket).is_empty());
    dom.settle(&mut panel);
    assert_eq!(panel.state(), PanelState::Closed);
    assert!(dom.attached.is_empty());
}

#[test]
fn timeout_drives_close_when_transition_never_fires() {
    let mut panel = desktop_panel();
    let mut dom = FakeDom::default();
    dom.apply(panel.request(PoiId(0)));
    dom.settle(&mut panel);
    dom.apply(panel.request(PoiId(1)));
    let close_ticket = dom.pending[0];
    dom.apply(panel.animation_timed_out(close_ticket));
    assert!(matches!(panel.state(), PanelState::Opening { poi: PoiId(1), .. }));
    // the transition that lost the race must not re-trigger anything
    assert!(panel.animation_finished(close_ticket).is_empty());
    assert_eq!(dom.attached, vec![PoiId(1)]);
}

#[test]
fn layout_tracks_viewport_at_request_time() {
    let mut panel = desktop_panel();
    let mut dom = FakeDom::default();
    dom.apply(panel.request(PoiId(0)));
    dom.settle(&mut panel);
    assert_eq!(panel.layout(), Some(PanelLayout::Floating));
    panel.set_viewport_width(400.0);
    dom.apply(panel.request(PoiId(1)));
    dom.settle(&mut panel);
    assert_eq!(panel.layout(), Some(PanelLayout::Sheet));
}
