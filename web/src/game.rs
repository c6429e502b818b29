use crate::settings::{self, SettingsView};
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use memento_core as game;
use game::PlayOutcome;
use yew::prelude::*;

/// How long a non matching pair stays visible, in milliseconds.
const NON_MATCHING_CARD_TIME: u32 = 1000;

/// Engine plus the presentation-only state the view layers on top of it.
#[derive(Clone, Debug)]
pub(crate) struct GameSession {
    pub engine: game::GameEngine,
    /// Pair already concealed by the engine but still drawn face-up.
    pub mismatch_shown: Option<(usize, usize)>,
}

impl GameSession {
    fn new(seed: u64) -> Self {
        Self {
            engine: game::GameEngine::new(seed),
            mismatch_shown: None,
        }
    }

    fn restart(&mut self, (rows, columns): (game::Dim, game::Dim)) -> game::Result<()> {
        self.engine.initialize(rows, columns, game::DEFAULT_IMAGES)?;
        self.mismatch_shown = None;
        Ok(())
    }

    fn is_face_up(&self, index: usize) -> bool {
        let revealed = self
            .engine
            .card_at(index)
            .is_ok_and(|card| card.is_revealed());
        revealed
            || self
                .mismatch_shown
                .is_some_and(|(first, second)| index == first || index == second)
    }

    fn play(&mut self, index: usize) -> game::Result<PlayOutcome> {
        let outcome = self.engine.play(index)?;
        if let PlayOutcome::NoMatch(first, second) = outcome {
            self.mismatch_shown = Some((first, second));
        }
        Ok(outcome)
    }

    /// Turns the shown mismatch face-down, true if one was shown.
    fn flip_back(&mut self) -> bool {
        self.mismatch_shown.take().is_some()
    }

    fn end_game_score(&self) -> Option<game::Score> {
        self.engine.is_game_over().then(|| self.engine.score())
    }

    /// Score to show over the board, hidden while the settings dialog is open.
    fn end_game_overlay(&self, settings_open: bool) -> Option<game::Score> {
        self.end_game_score().filter(|_| !settings_open)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Play(usize),
    FlipBack,
    ToggleSettings,
    SelectGrid(String),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    index: usize,
    card: game::Card,
    face_up: bool,
    callback: Callback<usize>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        index,
        card,
        face_up,
        callback,
    } = props.clone();

    let class = classes!("flip-container", face_up.then_some("clicked"));
    let back = classes!(
        "back",
        format!("card-{}", card.value()),
        card.is_matching_card().then_some("matching")
    );

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        log::trace!("card {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick}>
            <div class="flipper">
                <a class="front" href="#"/>
                <a class={back} href="#"/>
            </div>
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Starting grid, as rows x columns
    #[arg(short, long)]
    pub grid: Option<String>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    selected_grid: String,
    settings_open: bool,
    flip_back_timeout: Option<Timeout>,
}

impl GameView {
    fn start_grid(props: &GameProps) -> (game::Dim, game::Dim) {
        let fallback = game::GameConfig::default();
        match props.grid.as_deref().map(game::parse_grid) {
            Some(Ok(grid)) => grid,
            Some(Err(err)) => {
                log::warn!("Ignoring grid option: {}", err);
                (fallback.rows, fallback.columns)
            }
            None => (fallback.rows, fallback.columns),
        }
    }

    fn cancel_flip_back(&mut self) -> bool {
        // dropping the timeout cancels it
        self.flip_back_timeout.take();
        self.session.flip_back()
    }

    fn play(&mut self, ctx: &Context<Self>, index: usize) -> bool {
        let flipped_back = self.cancel_flip_back();
        let columns = self.session.engine.settings().columns;
        log::debug!("play card at {:?}", game::position_of(index, columns));

        match self.session.play(index) {
            Ok(outcome @ PlayOutcome::NoMatch(..)) => {
                log::debug!("{}", outcome);
                let link = ctx.link().clone();
                self.flip_back_timeout = Some(Timeout::new(NON_MATCHING_CARD_TIME, move || {
                    link.send_message(Msg::FlipBack)
                }));
                true
            }
            Ok(outcome) => {
                log::debug!("{}", outcome);
                outcome.has_update() || flipped_back
            }
            Err(err) => {
                log::error!("failed to play card {}: {}", index, err);
                flipped_back
            }
        }
    }

    fn new_game(&mut self) -> bool {
        let restarted =
            game::parse_grid(&self.selected_grid).and_then(|grid| self.session.restart(grid));

        match restarted {
            Ok(()) => {
                self.flip_back_timeout.take();
                self.settings_open = false;
                true
            }
            Err(err) => {
                log::warn!("Rejected settings {}: {}", self.selected_grid, err);
                false
            }
        }
    }

    fn view_end_game(&self, ctx: &Context<Self>) -> Html {
        let Some(score) = self.session.end_game_overlay(self.settings_open) else {
            return html! {};
        };

        html! {
            <dialog id="end-game" open={true}>
                <article>
                    <h2>{score.verdict()}</h2>
                    <p>{score.to_string()}</p>
                    <footer>
                        <button onclick={ctx.link().callback(|_| Msg::ToggleSettings)}>
                            {"Play again"}
                        </button>
                    </footer>
                </article>
            </dialog>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        let grid = Self::start_grid(props);

        let mut session = GameSession::new(seed);
        if let Err(err) = session.restart(grid) {
            log::error!("failed to start a {}x{} game: {}", grid.0, grid.1, err);
        }

        Self {
            session,
            selected_grid: settings::grid_label(grid),
            settings_open: false,
            flip_back_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Play(index) => self.play(ctx, index),
            FlipBack => {
                self.flip_back_timeout.take();
                self.session.flip_back()
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            SelectGrid(grid) => {
                log::debug!("selected grid: {}", grid);
                self.selected_grid = grid;
                true
            }
            NewGame => self.new_game(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let config = self.session.engine.settings();
        let cards = self.session.engine.cards();
        let callback = ctx.link().callback(Play);

        html! {
            <div class="memory">
                <small onclick={ctx.link().callback(|_| ToggleSettings)}>{"···"}</small>
                <table id="memory--cards">
                    {
                        for (0..config.rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..config.columns).filter_map(|column| {
                                        let index = game::index_of((row, column), config.columns);
                                        let card = *cards.get(index)?;
                                        let face_up = self.session.is_face_up(index);
                                        let callback = callback.clone();
                                        Some(html! {
                                            <CardView {index} {card} {face_up} {callback}/>
                                        })
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <SettingsView
                    open={self.settings_open}
                    selected={self.selected_grid.clone()}
                    onselect={ctx.link().callback(SelectGrid)}
                    onapply={ctx.link().callback(|_: ()| NewGame)}
                />
                {self.view_end_game(ctx)}
            </div>
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn mismatch_round_trip_in_browser() {
        let mut session = GameSession::new(js_random_seed());
        let config = game::GameConfig::new(2, 2, 2).unwrap();
        session
            .engine
            .initialize_with(config, game::PresetDeckGenerator::new([2, 1, 1, 2]))
            .unwrap();

        assert_eq!(session.play(0).unwrap(), PlayOutcome::FirstCardFlipped);
        assert_eq!(session.play(1).unwrap(), PlayOutcome::NoMatch(0, 1));
        assert!(session.is_face_up(0) && session.is_face_up(1));
        assert!(session.flip_back());
        assert!(!session.is_face_up(0) && !session.is_face_up(1));
    }
}
