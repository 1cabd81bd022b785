//! Single-move resolution: validation order, cost accounting, ice chains,
//! warps, and terrain side effects.
//!
//! The whole chain for one intent resolves inside one call. Ice sliding is
//! an iterative loop rather than recursion; each iteration either advances
//! the player or ends the move, and a panel-count cap bounds the rare
//! warp-onto-ice cycles.

use crate::events::{Event, ItemKind};
use crate::state::{Direction, GridModel, Overlay, Position, Terrain};

use super::RejectReason;

/// Outcome of resolving one intent, before terminal-state evaluation.
pub(super) struct Resolution {
    pub rejection: Option<RejectReason>,
    pub events: Vec<Event>,
}

pub(super) fn resolve_move(model: &mut GridModel, direction: Direction) -> Resolution {
    let mut events = Vec::new();

    // Base cost is fixed by the panel the player leaves: marsh departure is
    // a surcharge on the whole move. Warp marsh crossings add on top.
    let mut pending_cost = departure_cost(model, model.player().position);
    // Owed once the chain has slid over at least one ice panel. A block hit
    // mid-chain charges it exactly once; charging clears it.
    let mut slide_cost_owed = false;
    let mut slide_steps: u32 = 0;

    let mut remaining_steps = model.grid().size() * model.grid().size();

    loop {
        let current = model.player().position;
        let target = current.step(direction);

        let target_panel = match model.grid().panel(target) {
            Some(panel) if !panel.terrain.blocks_entry() => *panel,
            _ => {
                events.push(Event::Knockback { direction });
                charge_deferred(model, &mut slide_cost_owed, pending_cost);
                return rejected(RejectReason::Blocked, events, slide_steps);
            }
        };

        match target_panel.overlay {
            Overlay::Boulder if model.player().inventory().hammers == 0 => {
                events.push(Event::Knockback { direction });
                charge_deferred(model, &mut slide_cost_owed, pending_cost);
                return rejected(RejectReason::NeedsHammer, events, slide_steps);
            }
            Overlay::Enemy if model.player().inventory().swords == 0 => {
                model.player_mut().lose_health(1);
                events.push(Event::Knockback { direction });
                charge_deferred(model, &mut slide_cost_owed, pending_cost);
                return rejected(RejectReason::NeedsSword, events, slide_steps);
            }
            Overlay::Statue => {
                // Statues are inert scenery and never cost a move, deferred
                // or otherwise.
                events.push(Event::StatueTouched { position: target });
                return rejected(RejectReason::Inert, events, slide_steps);
            }
            _ => {}
        }

        // Step accepted. Departure side effect first: sand dissolves behind
        // the player, so re-entry is fatal.
        if terrain_at(model, current) == Terrain::Sand {
            if let Some(panel) = model.grid_mut().panel_mut(current) {
                panel.terrain = Terrain::Lava;
            }
            events.push(Event::SandDissolved { position: current });
        }

        if slide_steps == 0 {
            events.push(Event::Moved {
                from: current,
                to: target,
            });
        }
        model.player_mut().position = target;

        consume_overlay(model, target, target_panel.overlay, &mut events);

        if let Overlay::Warp(_) = target_panel.overlay {
            if let Some(partner) = model.grid().warp_partner(target) {
                // One extra deduction if either endpoint is marsh, never two.
                if target_panel.terrain == Terrain::Marsh
                    || terrain_at(model, partner) == Terrain::Marsh
                {
                    pending_cost += 1;
                }
                events.push(Event::Warped {
                    from: target,
                    to: partner,
                });
                model.player_mut().position = partner;
            }
        }

        match terrain_at(model, model.player().position) {
            Terrain::Lava => {
                model.player_mut().kill();
                break;
            }
            Terrain::Ice => {
                slide_steps += 1;
                slide_cost_owed = true;
                remaining_steps -= 1;
                if remaining_steps == 0 {
                    break;
                }
            }
            _ => break,
        }
    }

    // The chain settled on a terminal panel: cost accounting closes here.
    model.player_mut().spend_moves(pending_cost);
    if slide_steps > 0 {
        events.push(Event::Slid {
            chain_length: slide_steps,
        });
    }

    Resolution {
        rejection: None,
        events,
    }
}

/// Applies and clears a consumable overlay on the panel just entered.
fn consume_overlay(model: &mut GridModel, position: Position, overlay: Overlay, events: &mut Vec<Event>) {
    match overlay {
        Overlay::Boulder => {
            model.player_mut().use_hammer();
            events.push(Event::BoulderBroken { position });
        }
        Overlay::Enemy => {
            model.player_mut().use_sword();
            events.push(Event::EnemyKilled { position });
        }
        Overlay::Gem => {
            model.player_mut().collect_gem();
            events.push(Event::ItemConsumed {
                kind: ItemKind::Gem,
            });
            if model.player().gems_remaining() == 0 && model.grid_mut().open_exit() {
                events.push(Event::ExitOpened);
            }
        }
        Overlay::Hammer => {
            model.player_mut().add_hammer();
            model.player_mut().record_item_found();
            events.push(Event::ItemConsumed {
                kind: ItemKind::Hammer,
            });
        }
        Overlay::Sword => {
            model.player_mut().add_sword();
            model.player_mut().record_item_found();
            events.push(Event::ItemConsumed {
                kind: ItemKind::Sword,
            });
        }
        Overlay::Heart => {
            model.player_mut().gain_health(1);
            model.player_mut().record_item_found();
            events.push(Event::ItemConsumed {
                kind: ItemKind::Heart,
            });
        }
        // Warps persist; statues and blocked obstacles never reach here.
        Overlay::None | Overlay::Statue | Overlay::Warp(_) => return,
    }

    if let Some(panel) = model.grid_mut().panel_mut(position) {
        panel.overlay = Overlay::None;
    }
}

/// Charges the deferred slide cost exactly once and clears the owed flag.
fn charge_deferred(model: &mut GridModel, owed: &mut bool, pending_cost: i32) {
    if *owed {
        model.player_mut().spend_moves(pending_cost);
        *owed = false;
    }
}

fn departure_cost(model: &GridModel, position: Position) -> i32 {
    if terrain_at(model, position) == Terrain::Marsh {
        2
    } else {
        1
    }
}

fn terrain_at(model: &GridModel, position: Position) -> Terrain {
    model
        .grid()
        .panel(position)
        .map(|panel| panel.terrain)
        .unwrap_or(Terrain::Boundary)
}

fn rejected(reason: RejectReason, mut events: Vec<Event>, slide_steps: u32) -> Resolution {
    if slide_steps > 0 {
        events.push(Event::Slid {
            chain_length: slide_steps,
        });
    }
    Resolution {
        rejection: Some(reason),
        events,
    }
}
