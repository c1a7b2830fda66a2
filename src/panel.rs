//! Core panel logic and state management
//!
//! This module contains the main session struct for a running show: the
//! current question pointer, the countdown, the buzzer arbiter, the reveal
//! flag, and the wiring that turns operator and contestant input events
//! into state transitions and display announcements. All transitions run
//! synchronously inside [`Panel::receive_message`] or
//! [`Panel::receive_alarm`]; there is exactly one mutable state owner and
//! no concurrent writers.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use web_time::Duration;

use crate::{
    buzzer::{Buzzer, BuzzerPhase, BuzzerState},
    media::Media,
    quiz::{Question, Quiz},
    roster::{Contestant, ContestantId, Roster},
    session::Stage,
    sound::Sound,
    timer::{Countdown, Toggle},
};

/// Interval between countdown ticks
const TICK: Duration = Duration::from_secs(crate::constants::timer::TICK_SECONDS);

/// Input events received from the presentation layer
///
/// This enum categorizes incoming events by sender kind, mirroring the two
/// roles in the room: the operator at the console and the contestants on
/// their buzzers.
#[derive(Debug, Deserialize, Clone, derive_more::From)]
pub enum IncomingMessage {
    /// Events from the operator console
    Operator(IncomingOperatorMessage),
    /// Events from contestant buzzers
    Contestant(IncomingContestantMessage),
}

/// Events the operator console can send
#[derive(Debug, Deserialize, Clone, Copy)]
pub enum IncomingOperatorMessage {
    /// Advance to the next question
    Next,
    /// Go back to the previous question
    Previous,
    /// Start or pause the countdown
    ToggleTimer,
    /// Show or hide the answer for the current question
    ToggleAnswer,
    /// Force the buzzer back to the prepared state
    ResetBuzzer,
    /// Judge the pending claim as correct (`true`) or incorrect (`false`)
    Grade(bool),
    /// Replace a contestant's score outright
    SetScore {
        /// The contestant whose score to replace
        contestant: ContestantId,
        /// The new score
        score: i64,
    },
}

/// Events a contestant buzzer can send
#[derive(Debug, Deserialize, Clone, Copy)]
pub enum IncomingContestantMessage {
    /// The contestant wants to answer now
    Buzz(ContestantId),
}

/// Scheduled alarms delivered back to the panel by the embedder
///
/// The panel never owns a clock: when the countdown runs, it asks the
/// embedder to deliver a tick one interval out, stamped with the timer
/// epoch it was scheduled under. Stale ticks are discarded on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlarmMessage {
    /// One countdown tick is due
    Tick {
        /// Timer epoch this tick was scheduled under
        epoch: u64,
    },
}

/// Incremental updates sent to the presentation layer
///
/// Each variant describes one region of the display that changed; the
/// presentation layer applies them as they arrive.
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone)]
pub enum UpdateMessage {
    /// A different question is now current
    QuestionChanged {
        /// Index of the current question (0-based)
        index: usize,
        /// Total number of questions
        count: usize,
        /// The question text
        content: String,
        /// Optional image shown alongside the question
        media: Option<Media>,
    },
    /// The countdown value or running state changed
    TimerUpdate {
        /// Seconds left on the clock
        remaining: u64,
        /// Whether the countdown is running
        running: bool,
    },
    /// The buzzer state changed
    BuzzerStatus {
        /// The arbiter phase
        phase: BuzzerPhase,
        /// Human-readable status line for the display
        label: String,
    },
    /// Scores or active flags changed
    Scoreboard {
        /// Contestants ranked by score descending, ties in registration order
        standings: Vec<Contestant>,
    },
    /// The answer reveal state changed
    AnswerReveal {
        /// The answer text when shown, `None` when hidden
        answer: Option<String>,
    },
    /// The grading controls should be shown or hidden
    GradingControls {
        /// Whether the correct/wrong buttons are visible
        visible: bool,
    },
}

impl UpdateMessage {
    /// Converts the update message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Full-state snapshot sent to a (re)connecting presentation surface
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone)]
pub enum SyncMessage {
    /// The complete board state
    Board {
        /// Index of the current question (0-based)
        index: usize,
        /// Total number of questions
        count: usize,
        /// The question text
        content: String,
        /// Optional image shown alongside the question
        media: Option<Media>,
        /// The answer text when revealed, `None` when hidden
        answer: Option<String>,
        /// Seconds left on the clock
        remaining: u64,
        /// Whether the countdown is running
        running: bool,
        /// The full arbiter state, including any claimant
        buzzer: BuzzerState,
        /// Human-readable buzzer status line
        label: String,
        /// Contestants ranked by score descending, ties in registration order
        standings: Vec<Contestant>,
        /// Whether the correct/wrong buttons are visible
        grading_visible: bool,
    },
}

impl SyncMessage {
    /// Converts the sync message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// The main panel session struct
///
/// Holds all mutable state for one run of the show. Constructed once at
/// program start, mutated through [`Panel::receive_message`] and
/// [`Panel::receive_alarm`], no teardown needed.
#[derive(Debug, Serialize, Deserialize)]
pub struct Panel {
    /// The question store, immutable after load
    quiz: Quiz,
    /// The contestant registry
    roster: Roster,
    /// The countdown for the current question
    timer: Countdown,
    /// The buzzer arbiter
    buzzer: Buzzer,
    /// Index of the current question
    current: usize,
    /// Whether the current question's answer is shown
    revealed: bool,
}

impl Panel {
    /// Creates a panel session over a quiz and a contestant roster
    ///
    /// The countdown is loaded with the first question's time limit and
    /// the buzzer starts prepared. Nothing is announced; call
    /// [`Panel::state_message`] to obtain the initial snapshot for the
    /// presentation surface.
    pub fn new(quiz: Quiz, roster: Roster) -> Self {
        let timer = Countdown::new(quiz.get(0).map_or(Duration::ZERO, Question::time));
        Self {
            quiz,
            roster,
            timer,
            buzzer: Buzzer::default(),
            current: 0,
            revealed: false,
        }
    }

    /// Returns the question store
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// Returns the contestant registry
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the countdown state
    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    /// Returns the buzzer arbiter
    pub fn buzzer(&self) -> &Buzzer {
        &self.buzzer
    }

    /// Returns the index of the current question
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Whether the current question's answer is shown
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    fn current_question(&self) -> Option<&Question> {
        self.quiz.get(self.current)
    }

    fn current_time(&self) -> Duration {
        self.current_question().map_or(Duration::ZERO, Question::time)
    }

    /// Handles an input event from the presentation layer
    ///
    /// Invalid events (claims while locked, grading with no claim,
    /// navigation past either end, unknown contestants) are silently
    /// ignored; no input event is an error.
    ///
    /// # Arguments
    ///
    /// * `message` - The input event to process
    /// * `schedule_message` - Function to schedule delayed tick alarms
    /// * `stage` - The presentation surface to announce changes to
    pub fn receive_message<T: Stage, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        message: IncomingMessage,
        schedule_message: S,
        stage: &T,
    ) {
        match message {
            IncomingMessage::Operator(operator_message) => match operator_message {
                IncomingOperatorMessage::Next => self.next(stage),
                IncomingOperatorMessage::Previous => self.previous(stage),
                IncomingOperatorMessage::ToggleTimer => {
                    self.toggle_timer(schedule_message, stage);
                }
                IncomingOperatorMessage::ToggleAnswer => self.toggle_answer(stage),
                IncomingOperatorMessage::ResetBuzzer => self.reset_buzzer(stage),
                IncomingOperatorMessage::Grade(correct) => self.grade(correct, stage),
                IncomingOperatorMessage::SetScore { contestant, score } => {
                    self.set_score(contestant, score, stage);
                }
            },
            IncomingMessage::Contestant(IncomingContestantMessage::Buzz(id)) => {
                self.claim(id, stage);
            }
        }
    }

    /// Handles a scheduled tick alarm
    ///
    /// Ticks stamped with a stale epoch (scheduled before a stop, pause,
    /// or reset) are discarded without effect. A live tick decrements the
    /// countdown; at zero the timer halts, the arbiter times out, the
    /// timeout cue plays, and the answer is force-revealed.
    ///
    /// # Arguments
    ///
    /// * `message` - The alarm to process
    /// * `schedule_message` - Function to schedule the follow-up tick
    /// * `stage` - The presentation surface to announce changes to
    pub fn receive_alarm<T: Stage, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        message: AlarmMessage,
        mut schedule_message: S,
        stage: &T,
    ) {
        let AlarmMessage::Tick { epoch } = message;
        if !self.timer.accepts(epoch) {
            return;
        }

        let remaining = self.timer.tick();
        self.announce_timer(stage);

        if remaining == 0 {
            if self.buzzer.timeout() {
                self.announce_buzzer(stage);
            }
            self.cue(stage, Sound::Timeout);
            self.reveal_answer(stage);
        } else {
            schedule_message(
                AlarmMessage::Tick {
                    epoch: self.timer.epoch(),
                },
                TICK,
            );
        }
    }

    /// Returns the full snapshot for a (re)connecting surface
    pub fn state_message(&self) -> SyncMessage {
        SyncMessage::Board {
            index: self.current,
            count: self.quiz.len(),
            content: self
                .current_question()
                .map_or_else(String::new, |q| q.content().to_owned()),
            media: self.current_question().and_then(|q| q.media().cloned()),
            answer: self.shown_answer(),
            remaining: self.timer.remaining(),
            running: self.timer.is_running(),
            buzzer: self.buzzer.state(),
            label: self.buzzer_label(),
            standings: self.roster.standings(),
            grading_visible: matches!(self.buzzer.phase(), BuzzerPhase::Won),
        }
    }

    // Input handlers

    fn next<T: Stage>(&mut self, stage: &T) {
        if self.current + 1 < self.quiz.len() {
            self.current += 1;
            self.load_current(stage);
        }
    }

    fn previous<T: Stage>(&mut self, stage: &T) {
        if self.current > 0 {
            self.current -= 1;
            self.load_current(stage);
        }
    }

    /// Brings every display region in line with a freshly loaded question
    fn load_current<T: Stage>(&mut self, stage: &T) {
        self.revealed = false;
        self.buzzer.reset();
        self.roster.clear_active();
        self.timer.reset(self.current_time());

        if let Some(question) = self.current_question() {
            stage.apply(&UpdateMessage::QuestionChanged {
                index: self.current,
                count: self.quiz.len(),
                content: question.content().to_owned(),
                media: question.media().cloned(),
            });
        }
        stage.apply(&UpdateMessage::AnswerReveal { answer: None });
        self.announce_timer(stage);
        self.announce_buzzer(stage);
        stage.apply(&UpdateMessage::GradingControls { visible: false });
        self.announce_scoreboard(stage);
    }

    fn toggle_timer<T: Stage, S: FnMut(AlarmMessage, Duration)>(
        &mut self,
        mut schedule_message: S,
        stage: &T,
    ) {
        match self.timer.toggle() {
            Toggle::Started => {
                // countdown and buzzer-acceptance window start together
                if self.buzzer.open() {
                    self.announce_buzzer(stage);
                }
                self.announce_timer(stage);
                schedule_message(
                    AlarmMessage::Tick {
                        epoch: self.timer.epoch(),
                    },
                    TICK,
                );
            }
            Toggle::Paused => self.announce_timer(stage),
            Toggle::Ignored => {}
        }
    }

    fn claim<T: Stage>(&mut self, id: ContestantId, stage: &T) {
        if self.roster.get(id).is_none() {
            return;
        }
        if !self.buzzer.claim(id) {
            return;
        }

        self.roster.activate_only(id);
        self.timer.halt();

        self.announce_timer(stage);
        self.announce_buzzer(stage);
        stage.apply(&UpdateMessage::GradingControls { visible: true });
        self.announce_scoreboard(stage);
        self.cue(stage, Sound::Claim);
    }

    fn grade<T: Stage>(&mut self, correct: bool, stage: &T) {
        let Some(id) = self.buzzer.resolve() else {
            return;
        };

        let delta = if correct {
            crate::constants::scoring::CORRECT_DELTA
        } else {
            crate::constants::scoring::INCORRECT_DELTA
        };
        self.roster.apply_delta(id, delta);

        self.finish_round(stage);
        self.reveal_answer(stage);
        self.cue(stage, if correct { Sound::Correct } else { Sound::Wrong });
    }

    fn reset_buzzer<T: Stage>(&mut self, stage: &T) {
        self.buzzer.reset();
        self.finish_round(stage);
    }

    /// Returns the round to the prepared state after a resolve or reset
    ///
    /// Clears active flags and reloads the countdown with the current
    /// question's time limit.
    fn finish_round<T: Stage>(&mut self, stage: &T) {
        self.roster.clear_active();
        self.timer.reset(self.current_time());

        self.announce_timer(stage);
        self.announce_buzzer(stage);
        stage.apply(&UpdateMessage::GradingControls { visible: false });
        self.announce_scoreboard(stage);
    }

    fn toggle_answer<T: Stage>(&mut self, stage: &T) {
        self.revealed = !self.revealed;
        self.announce_reveal(stage);
    }

    /// Forces the answer into the shown state; revealing twice has no
    /// additional effect
    fn reveal_answer<T: Stage>(&mut self, stage: &T) {
        if !self.revealed {
            self.revealed = true;
            self.announce_reveal(stage);
        }
    }

    fn set_score<T: Stage>(&mut self, id: ContestantId, score: i64, stage: &T) {
        if self.roster.set_score(id, score) {
            self.announce_scoreboard(stage);
        }
    }

    // Announcements

    fn shown_answer(&self) -> Option<String> {
        if self.revealed {
            self.current_question().map(|q| q.answer().to_owned())
        } else {
            None
        }
    }

    fn buzzer_label(&self) -> String {
        match self.buzzer.state() {
            BuzzerState::Prepared => "Standing by".to_owned(),
            BuzzerState::Listening => "Buzzers open".to_owned(),
            BuzzerState::Won(id) => {
                let name = self.roster.get(id).map_or("Unknown", Contestant::name);
                format!("{name} buzzed in!")
            }
            BuzzerState::TimedOut => "Time's up".to_owned(),
        }
    }

    fn announce_timer<T: Stage>(&self, stage: &T) {
        stage.apply(&UpdateMessage::TimerUpdate {
            remaining: self.timer.remaining(),
            running: self.timer.is_running(),
        });
    }

    fn announce_buzzer<T: Stage>(&self, stage: &T) {
        stage.apply(&UpdateMessage::BuzzerStatus {
            phase: self.buzzer.phase(),
            label: self.buzzer_label(),
        });
    }

    fn announce_scoreboard<T: Stage>(&self, stage: &T) {
        stage.apply(&UpdateMessage::Scoreboard {
            standings: self.roster.standings(),
        });
    }

    fn announce_reveal<T: Stage>(&self, stage: &T) {
        stage.apply(&UpdateMessage::AnswerReveal {
            answer: self.shown_answer(),
        });
    }

    /// Plays a sound cue, swallowing playback failure
    ///
    /// Playback problems (e.g. audio blocked before the first user
    /// interaction) are logged for diagnostics and never reach game state.
    fn cue<T: Stage>(&self, stage: &T, sound: Sound) {
        if let Err(error) = stage.play_sound(sound) {
            tracing::debug!(?sound, %error, "sound playback failed");
        }
    }
}
