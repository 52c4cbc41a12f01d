//! Game orchestration between two players on a console.

use crate::config::GameConfig;
use crate::error::{SessionError, SessionErrorKind};
use crate::input::parse_position;
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Outcome, Player};
use tracing::{debug, info, instrument};

/// Running tally across rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    players: [Player; 2],
    wins: [usize; 2],
    draws: usize,
}

impl SessionSummary {
    fn new(players: &[Player; 2]) -> Self {
        Self {
            players: players.clone(),
            wins: [0; 2],
            draws: 0,
        }
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Winner(winner) => {
                if let Some(seat) = self.players.iter().position(|p| p == winner) {
                    self.wins[seat] += 1;
                }
            }
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Both players, in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Rounds won by each player, in turn order.
    pub fn wins(&self) -> [usize; 2] {
        self.wins
    }

    /// Rounds that ended on a full board.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Rounds played.
    pub fn rounds(&self) -> usize {
        self.wins[0] + self.wins[1] + self.draws
    }
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score after {} rounds: {} {}, {} {}, draws {}",
            self.rounds(),
            self.players[0].name(),
            self.wins[0],
            self.players[1].name(),
            self.wins[1],
            self.draws
        )
    }
}

/// Runs games between two players over a line-based console.
pub struct GameSession<R, W> {
    config: GameConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    /// Creates a new session reading answers from `input`.
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Returns the console output, consuming the session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn expect_line(&mut self, awaiting: &str) -> Result<String, SessionError> {
        self.read_line()?
            .ok_or_else(|| SessionError::new(SessionErrorKind::InputClosed(awaiting.to_string())))
    }

    fn show_board(&mut self, board: &Board) -> Result<(), SessionError> {
        writeln!(self.output)?;
        for row in board.render() {
            writeln!(self.output, "{row}")?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Creates both players, prompting for names not set in the config.
    #[instrument(skip(self))]
    pub fn read_players(&mut self) -> Result<[Player; 2], SessionError> {
        let names = match self.config.player_names().clone() {
            Some(names) => names,
            None => {
                let mut names = [String::new(), String::new()];
                for (seat, name) in names.iter_mut().enumerate() {
                    writeln!(self.output, "Please enter Player {}'s name:", seat + 1)?;
                    *name = self.expect_line("a player name")?;
                }
                names
            }
        };
        let [first, second] = names;
        let [first_icon, second_icon] = self.config.icons().clone();
        let players = [
            Player::new(first, first_icon),
            Player::new(second, second_icon),
        ];
        info!(first = %players[0], second = %players[1], "Players ready");
        Ok(players)
    }

    /// Asks `player` for positions until one is accepted.
    #[instrument(skip(self, board, player), fields(player = %player.name()))]
    fn player_move(&mut self, board: &mut Board, player: &Player) -> Result<(), SessionError> {
        self.show_board(board)?;
        writeln!(
            self.output,
            "{}, please enter the number of an empty space for your next move.",
            player.name()
        )?;
        loop {
            let answer = self.expect_line("a move")?;
            if board.make_move(parse_position(&answer), player) {
                return Ok(());
            }
            debug!(answer = %answer, "Invalid move, asking again");
            self.show_board(board)?;
            writeln!(
                self.output,
                "{}, that move is invalid. Please try again",
                player.name()
            )?;
        }
    }

    /// Plays one game on a fresh board, alternating turns from `players[0]`.
    ///
    /// Ends when a player owns a line or the board is full.
    #[instrument(skip(self, players), fields(dimension = self.config.dimension()))]
    pub fn play_round(&mut self, players: &[Player; 2]) -> Result<Outcome, SessionError> {
        let mut board = Board::new(*self.config.dimension())?;
        let mut seat = 0;
        loop {
            self.player_move(&mut board, &players[seat])?;
            if let Some(outcome) = board.outcome() {
                self.announce(&board, &outcome)?;
                return Ok(outcome);
            }
            seat = 1 - seat;
        }
    }

    fn announce(&mut self, board: &Board, outcome: &Outcome) -> Result<(), SessionError> {
        match outcome {
            Outcome::Winner(winner) => {
                info!(winner = %winner, moves = board.moves_made(), "Game won");
                writeln!(
                    self.output,
                    "Congratulations, {}!! You have won!!",
                    winner.name()
                )?;
            }
            Outcome::Draw => {
                info!(moves = board.moves_made(), "Game drawn");
                writeln!(self.output, "It's a draw! Nobody wins this time.")?;
            }
        }
        writeln!(self.output, "The result is as follows:")?;
        self.show_board(board)
    }

    /// Asks whether to play again; end of input means no.
    fn ask_rematch(&mut self) -> Result<bool, SessionError> {
        writeln!(self.output, "Play again? (y/n)")?;
        let again = self
            .read_line()?
            .is_some_and(|answer| answer.trim_start().starts_with(['y', 'Y']));
        debug!(again, "Rematch answer");
        Ok(again)
    }

    /// Plays rounds until one ends without a rematch.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let players = self.read_players()?;
        let mut summary = SessionSummary::new(&players);
        loop {
            let outcome = self.play_round(&players)?;
            summary.record(&outcome);
            if !*self.config.rematch() || !self.ask_rematch()? {
                break;
            }
        }
        if summary.rounds() > 1 {
            writeln!(self.output, "{summary}")?;
        }
        info!(rounds = summary.rounds(), draws = summary.draws(), "Session finished");
        Ok(summary)
    }
}
