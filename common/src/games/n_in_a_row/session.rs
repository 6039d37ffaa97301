use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::board::{Board, GridBoard};
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::RoundState;
use super::settings::{MenuChoice, RoundSettings};
use super::types::{
    Difficulty, GameMode, GameStatus, Mark, MoveCommand, RoundResult, interpret_move,
};

pub const BOT_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Mode,
    Difficulty,
    BoardSize,
    Move(Mark),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    BotMove { mark: Mark, index: usize },
    Winner(Mark),
    Draw,
    ProgramEnded,
}

/// Source of the numbers a player types. `None` means input is closed.
pub trait PlayerInput {
    fn read_number(&mut self, prompt: Prompt) -> Option<i64>;
}

pub trait GameRenderer {
    fn show_board<B: Board>(&mut self, state: &RoundState<B>);

    fn show_event(&mut self, event: SessionEvent);
}

enum RoundSetup {
    Start(RoundSettings),
    Abandoned,
    Exit,
}

pub struct GameSession<I: PlayerInput, R: GameRenderer> {
    input: I,
    renderer: R,
    rng: SessionRng,
}

impl<I: PlayerInput, R: GameRenderer> GameSession<I, R> {
    pub fn new(input: I, renderer: R, rng: SessionRng) -> Self {
        Self {
            input,
            renderer,
            rng,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Plays rounds until the player exits and returns how each round ended.
    pub fn run(&mut self) -> Vec<RoundResult> {
        log!("Session started with bot seed {}", self.rng.seed());
        let mut results = Vec::new();

        loop {
            let settings = match self.configure_round() {
                RoundSetup::Start(settings) => settings,
                RoundSetup::Abandoned => continue,
                RoundSetup::Exit => break,
            };

            let result = match GridBoard::new(settings.board_size) {
                Ok(board) => self.play_round(&settings, RoundState::with_board(board)),
                Err(e) => {
                    log!("Round abandoned: {}", e);
                    continue;
                }
            };

            log!("Round finished: {:?}", result);
            results.push(result);
            if result == RoundResult::Exited {
                break;
            }
        }

        self.renderer.show_event(SessionEvent::ProgramEnded);
        log!("Session ended after {} round(s)", results.len());
        results
    }

    fn configure_round(&mut self) -> RoundSetup {
        let Some(choice) = self.input.read_number(Prompt::Mode) else {
            return RoundSetup::Exit;
        };
        let mode = match MenuChoice::from_input(choice) {
            MenuChoice::Exit => return RoundSetup::Exit,
            MenuChoice::Play(mode) => mode,
        };

        let difficulty = match mode {
            GameMode::VersusBot => match self.input.read_number(Prompt::Difficulty) {
                Some(value) => Some(Difficulty::from_input(value)),
                None => return RoundSetup::Exit,
            },
            GameMode::TwoPlayers => None,
        };

        let Some(size) = self.input.read_number(Prompt::BoardSize) else {
            return RoundSetup::Exit;
        };
        let settings = match usize::try_from(size) {
            Ok(board_size) => RoundSettings {
                mode,
                difficulty,
                board_size,
            },
            Err(_) => {
                log!("Invalid board size {}", size);
                return RoundSetup::Abandoned;
            }
        };

        if let Err(e) = settings.validate() {
            log!("Invalid round settings: {}", e);
            return RoundSetup::Abandoned;
        }

        log!(
            "Starting round: {:?}, difficulty {:?}, size {}, win length {}",
            settings.mode,
            settings.difficulty,
            settings.board_size,
            settings.win_length()
        );
        RoundSetup::Start(settings)
    }

    /// Runs one round on the given fresh state until it is won, drawn,
    /// restarted or the program is exited.
    pub fn play_round<B: Board>(
        &mut self,
        settings: &RoundSettings,
        mut state: RoundState<B>,
    ) -> RoundResult {
        let bot_difficulty = settings.bot_difficulty();

        loop {
            self.renderer.show_board(&state);

            let raw = match bot_difficulty {
                Some(difficulty) if state.current_mark == BOT_MARK => {
                    let input = BotInput::new(&state.board, state.win_length, BOT_MARK);
                    match calculate_move(difficulty, &input, &mut self.rng) {
                        Some(pos) => {
                            let index = pos.to_move_index(state.size());
                            log!("Bot ({:?}) chooses {}", difficulty, index);
                            self.renderer.show_event(SessionEvent::BotMove {
                                mark: BOT_MARK,
                                index,
                            });
                            index as i64
                        }
                        None => {
                            log!("Bot has no move available, ending round as draw");
                            self.renderer.show_event(SessionEvent::Draw);
                            return RoundResult::Draw;
                        }
                    }
                }
                _ => match self.input.read_number(Prompt::Move(state.current_mark)) {
                    Some(value) => value,
                    None => return RoundResult::Exited,
                },
            };

            let pos = match interpret_move(raw, &state.board) {
                Ok(MoveCommand::Exit) => return RoundResult::Exited,
                Ok(MoveCommand::Restart) => return RoundResult::Restarted,
                Ok(MoveCommand::Place(pos)) => pos,
                Err(e) => {
                    log!("Rejected move from {}: {}", state.current_mark.symbol(), e);
                    continue;
                }
            };

            match state.place_mark(pos) {
                Ok(GameStatus::Won(mark)) => {
                    self.renderer.show_board(&state);
                    self.renderer.show_event(SessionEvent::Winner(mark));
                    return RoundResult::Won(mark);
                }
                Ok(GameStatus::Draw) => {
                    self.renderer.show_board(&state);
                    self.renderer.show_event(SessionEvent::Draw);
                    return RoundResult::Draw;
                }
                Ok(GameStatus::InProgress) => {}
                Err(e) => log!("Rejected move: {}", e),
            }
        }
    }
}
