use serde::Serialize;
use spacedeck::{
    ActionError, Card, Command, HandStatus, Notification, RoundOptions, RoundState, Screen, Seat,
    SeatMap, Session,
};
use wasm_bindgen::prelude::*;

const CARD_IMAGE_BASE: &str = "https://deckofcardsapi.com/static/img/";

#[wasm_bindgen]
pub struct WasmTable {
    session: Session,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            session: Session::new(RoundOptions::default(), seed as u64),
        }
    }

    pub fn play(&mut self) -> Result<JsValue, JsValue> {
        let events = self.session.play();
        notifications_to_js(&events)
    }

    #[wasm_bindgen(js_name = returnHome)]
    pub fn return_home(&mut self) {
        self.session.return_home();
    }

    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Command::Deal)
    }

    pub fn pass(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Command::Pass)
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Command::Stand)
    }

    pub fn restart(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(Command::Restart)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let round = self.session.round();
        let seats = SeatMap::from_fn(|seat| JsSeat::new(seat, self));

        let snapshot = Snapshot {
            screen: screen_to_str(self.session.screen()),
            state: state_to_str(round.state()),
            current: round.current().map(Seat::id),
            seats: seats.values().cloned().collect(),
            cards_remaining: round.cards_remaining() as u32,
            status: self.session.status().to_string(),
        };

        to_js_value(&snapshot)
    }
}

impl WasmTable {
    fn dispatch(&mut self, command: Command) -> Result<JsValue, JsValue> {
        let events = self.session.dispatch(command).map_err(js_err)?;
        notifications_to_js(&events)
    }
}

#[derive(Serialize)]
struct Snapshot {
    screen: &'static str,
    state: &'static str,
    current: Option<&'static str>,
    seats: Vec<JsSeat>,
    cards_remaining: u32,
    status: String,
}

#[derive(Serialize, Clone)]
struct JsSeat {
    id: &'static str,
    name: &'static str,
    avatar: &'static str,
    cards: Vec<JsCard>,
    total: u16,
    status: &'static str,
}

impl JsSeat {
    fn new(seat: Seat, table: &WasmTable) -> Self {
        let participant = table.session.round().participant(seat);
        Self {
            id: seat.id(),
            name: seat.name(),
            avatar: seat.avatar(),
            cards: participant
                .hand()
                .cards()
                .iter()
                .copied()
                .map(card_to_js)
                .collect(),
            total: participant.total(),
            status: hand_status_to_str(participant.hand().status()),
        }
    }
}

#[derive(Serialize, Clone)]
struct JsCard {
    rank: &'static str,
    suit: char,
    value: u16,
    image: String,
}

#[derive(Serialize)]
struct JsNotification {
    kind: &'static str,
    seat: Option<&'static str>,
    message: String,
}

fn card_to_js(card: Card) -> JsCard {
    let code: String = card.image_code().iter().collect();
    JsCard {
        rank: card.rank_label(),
        suit: card.suit.code(),
        value: card.value(),
        image: format!("{CARD_IMAGE_BASE}{code}.png"),
    }
}

fn notifications_to_js(events: &[Notification]) -> Result<JsValue, JsValue> {
    let events: Vec<JsNotification> = events
        .iter()
        .map(|event| JsNotification {
            kind: event.kind(),
            seat: event.seat().map(Seat::id),
            message: event.to_string(),
        })
        .collect();
    to_js_value(&events)
}

fn screen_to_str(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "Home",
        Screen::Game => "Game",
    }
}

fn state_to_str(state: RoundState) -> &'static str {
    match state {
        RoundState::NotStarted => "NotStarted",
        RoundState::InProgress { .. } => "InProgress",
        RoundState::Terminal(_) => "Terminal",
    }
}

fn hand_status_to_str(status: HandStatus) -> &'static str {
    match status {
        HandStatus::Active => "Active",
        HandStatus::Stood => "Stood",
        HandStatus::Busted => "Busted",
    }
}

fn js_err(err: ActionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
