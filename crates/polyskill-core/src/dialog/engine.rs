//! Dialog engine: owns one active state per session and dispatches
//! each turn to it.
//!
//! Dispatch is a pure function of `(state, utterance)` returning
//! `(reply, next_state)`; the engine never propagates an error to the
//! caller. Collaborator failures degrade to a user-facing reply for
//! that turn with a documented fallback transition, and nothing is
//! retried -- the user re-issuing the command is the retry mechanism.
//!
//! Exit-intent is checked before task intent in every state, so exit
//! always pre-empts the state's task.

use std::time::Duration;

use polyskill_types::dialog::DialogState;
use polyskill_types::error::{DialogError, TranslateError};
use polyskill_types::reply::{ImageCard, Reply, Suggestion};
use polyskill_types::translation::TranslationOutcome;
use polyskill_types::utterance::Utterance;

use crate::geo::{conditions, Geocoder, ImageStore, StaticMapRenderer, WeatherProvider};
use crate::scan::{classifier, url, UrlScanner};
use crate::translate::{parser, TranslationProvider};

use super::intent;
use super::session::SessionStore;

const GREETING: &str =
    "Привет. Меня зовут Алиса.\nА это мультинавык: переводчик, сканер, погода и карты.";
const MENU_TEXT: &str =
    "У нас есть несколько функций: переводчик, сканер, погода и карты.\nЧто хочешь попробовать?";
const FAREWELL: &str = "Пока!";
const THANKS_REPLY: &str = "Ага, не за что :)";

const TRANSLATOR_INTRO: &str = "Хорошо, давай переводить!\nПиши: переведи [слово]";
const SCANNER_INTRO: &str =
    "Хорошо, отправь ссылку на сканирование!\nПиши: [url] или ссылка: [url]";
const WEATHER_INTRO: &str = "Хорошо, пиши место, где надо узнать погоду!\nПиши: [место]";
const MAPS_INTRO: &str = "Введи любое место и я тебе его покажу на карте!";

const TRANSLATOR_HELP: &str = "Пиши: переведи [слово/предложение] с [языка] на [язык].\nПо умолчанию перевод производится с русского на английский";
const SCAN_FAIL: &str = "Что-то не так, либо Вы не ввели ссылку, либо она неправильная. Попробуйте еще раз, либо поменяйте ссылку ;)";
const WEATHER_FAIL: &str =
    "0_o Что-то вы делаете не так, либо пробуйте еще, либо измените ваш запрос.";
const MAPS_FAIL: &str = "Произошла ошибка";
const UPSTREAM_FAIL: &str = "Извините, сервис сейчас недоступен. Попробуйте еще раз.";

const UNKNOWN_SOURCE_LANGUAGE: &str = "Извините. Я пока не умею переводить с этого языка";
const UNKNOWN_TARGET_LANGUAGE: &str = "Извините. Я пока не умею переводить на этот язык";
const EMPTY_PAYLOAD: &str = "Извините. Вы не ввели то, что нужно перевести.";
const AMBIGUOUS_LANGUAGE: &str =
    "Извините. Я пока не умею распознавать языки. Укажите язык пожалуйста";
const SAME_LANGUAGE_PAIR: &str = "Извините. Укажите два разных языка пожалуйста";
const INVALID_PAIR: &str = "Вы указали неверный язык, перевод невозможен.";

const MAP_CARD_TITLE: &str = "Вот это место на карте";
const EXIT_SUGGESTION: &str = "Выйти";
const WEATHER_SUGGESTION: &str = "Погода в Москве";

/// Per-session dialog state machine wired to its collaborators.
///
/// Generic over the collaborator ports; the api crate pins the concrete
/// infra implementations via a type alias.
pub struct DialogEngine<S, T, G, M, W, I> {
    scanner: S,
    translator: T,
    geocoder: G,
    map_renderer: M,
    weather: W,
    images: I,
    sessions: SessionStore,
}

impl<S, T, G, M, W, I> DialogEngine<S, T, G, M, W, I>
where
    S: UrlScanner,
    T: TranslationProvider,
    G: Geocoder,
    M: StaticMapRenderer,
    W: WeatherProvider,
    I: ImageStore,
{
    pub fn new(
        scanner: S,
        translator: T,
        geocoder: G,
        map_renderer: M,
        weather: W,
        images: I,
        session_ttl: Duration,
    ) -> Self {
        Self {
            scanner,
            translator,
            geocoder,
            map_renderer,
            weather,
            images,
            sessions: SessionStore::new(session_ttl),
        }
    }

    /// Run one turn: look up the session's state, dispatch, store the
    /// transition. Overlapping turns for the same session serialize on
    /// the session lock; different sessions run in parallel.
    pub async fn handle_turn(&self, utterance: &Utterance) -> Reply {
        let slot = self
            .sessions
            .acquire(&utterance.session_id, utterance.is_new_session);
        let mut state = slot.lock().await;

        let (reply, next) = self.dispatch(*state, utterance).await;
        if next != *state {
            tracing::info!(
                session = %utterance.session_id,
                from = %*state,
                to = %next,
                "dialog transition"
            );
        }
        *state = next;
        reply
    }

    /// Dispatch one turn to the active state.
    pub async fn dispatch(
        &self,
        state: DialogState,
        utterance: &Utterance,
    ) -> (Reply, DialogState) {
        match state {
            // Exit behaves as a fresh greeting: a session revived after
            // a farewell restarts instead of sitting in a dead state.
            DialogState::Hello | DialogState::Exit => Self::greet(),
            DialogState::Choice => self.choose(utterance),
            DialogState::ScanUrl => self.scan_turn(utterance).await,
            DialogState::Translator => self.translate_turn(utterance).await,
            DialogState::Weather => self.weather_turn(utterance).await,
            DialogState::Maps => self.maps_turn(utterance).await,
        }
    }

    fn greet() -> (Reply, DialogState) {
        let mut reply = Reply::new();
        reply.set_text(GREETING);
        (reply, DialogState::Choice)
    }

    /// The menu re-prompt shown when a task state yields back.
    fn menu_reply() -> Reply {
        let mut reply = Reply::new();
        reply.set_text(MENU_TEXT);
        reply
    }

    fn choose(&self, utterance: &Utterance) -> (Reply, DialogState) {
        let tokens = &utterance.tokens;
        let mut reply = Reply::new();

        if intent::mentions_any(tokens, intent::EXIT_WORDS) {
            reply.set_text(FAREWELL);
            reply.end_session();
            return (reply, DialogState::Exit);
        }
        if intent::mentions(tokens, "переводчик") {
            reply.set_text(TRANSLATOR_INTRO);
            return (reply, DialogState::Translator);
        }
        if intent::mentions(tokens, "сканер") {
            reply.set_text(SCANNER_INTRO);
            return (reply, DialogState::ScanUrl);
        }
        if intent::mentions(tokens, "погода") || intent::mentions(tokens, "погоду") {
            reply.set_text(WEATHER_INTRO);
            reply.add_suggestion(Suggestion::new(WEATHER_SUGGESTION, true));
            return (reply, DialogState::Weather);
        }
        if intent::mentions(tokens, "карты") {
            reply.set_text(MAPS_INTRO);
            return (reply, DialogState::Maps);
        }

        reply.set_text(MENU_TEXT);
        reply.add_suggestion(Suggestion::new(EXIT_SUGGESTION, true));
        (reply, DialogState::Choice)
    }

    async fn scan_turn(&self, utterance: &Utterance) -> (Reply, DialogState) {
        if intent::mentions_any(&utterance.tokens, intent::EXIT_WORDS) {
            return (Self::menu_reply(), DialogState::Choice);
        }

        let mut reply = Reply::new();
        if intent::mentions_any(&utterance.tokens, intent::THANKS_WORDS) {
            reply.set_text(THANKS_REPLY);
        }

        // A bare URL is scanned as-is; a URL buried in a sentence needs
        // an explicit scan intent.
        let target = if url::looks_like_url(&utterance.raw_text) {
            Some(utterance.raw_text.as_str())
        } else if intent::mentions_any(&utterance.tokens, intent::SCAN_WORDS) {
            url::find_url(utterance)
        } else {
            None
        };

        match target {
            Some(target) => match self.scan_report(target).await {
                Ok(report) => reply.set_text(report),
                Err(err) => {
                    tracing::warn!(url = target, error = %err, "url scan failed");
                    reply.set_text(SCAN_FAIL);
                }
            },
            None => reply.set_text(SCAN_FAIL),
        }

        reply.add_suggestion(Suggestion::new(EXIT_SUGGESTION, true));
        (reply, DialogState::ScanUrl)
    }

    async fn scan_report(&self, target: &str) -> Result<String, DialogError> {
        let tally = self.scanner.scan(target).await?;
        if tally.is_empty() {
            return Err(DialogError::ClarificationNeeded(
                "scan produced no verdicts".to_string(),
            ));
        }
        Ok(classifier::report(&tally))
    }

    async fn translate_turn(&self, utterance: &Utterance) -> (Reply, DialogState) {
        if intent::mentions_any(&utterance.tokens, intent::EXIT_WORDS) {
            return (Self::menu_reply(), DialogState::Choice);
        }

        let mut reply = Reply::new();
        if intent::mentions_any(&utterance.tokens, intent::TRANSLATE_WORDS) {
            let request = parser::parse(&utterance.tokens, &utterance.foreign_words);
            match request.outcome {
                TranslationOutcome::Ok => {
                    match self
                        .translator
                        .translate(
                            &request.source_text,
                            &request.language_from,
                            &request.language_to,
                        )
                        .await
                    {
                        Ok(translated) => reply.set_text(translated),
                        Err(TranslateError::LanguagePairInvalid) => reply.set_text(INVALID_PAIR),
                        Err(err) => {
                            tracing::warn!(error = %err, "translation call failed");
                            reply.set_text(UPSTREAM_FAIL);
                        }
                    }
                }
                TranslationOutcome::UnknownSourceLanguage => {
                    reply.set_text(UNKNOWN_SOURCE_LANGUAGE)
                }
                TranslationOutcome::UnknownTargetLanguage => {
                    reply.set_text(UNKNOWN_TARGET_LANGUAGE)
                }
                TranslationOutcome::EmptyPayload => reply.set_text(EMPTY_PAYLOAD),
                TranslationOutcome::AmbiguousSameLanguage => reply.set_text(AMBIGUOUS_LANGUAGE),
                TranslationOutcome::SameLanguagePair => reply.set_text(SAME_LANGUAGE_PAIR),
            }
        } else {
            reply.set_text(TRANSLATOR_HELP);
            reply.add_suggestion(Suggestion::new(EXIT_SUGGESTION, true));
        }

        (reply, DialogState::Translator)
    }

    async fn weather_turn(&self, utterance: &Utterance) -> (Reply, DialogState) {
        if intent::mentions_any(&utterance.tokens, intent::EXIT_WORDS) {
            return (Self::menu_reply(), DialogState::Choice);
        }

        let mut reply = Reply::new();
        if intent::mentions_any(&utterance.tokens, intent::THANKS_WORDS) {
            reply.set_text(THANKS_REPLY);
        } else {
            match self.weather_report(utterance).await {
                Ok(report) => reply.set_text(report),
                Err(err) => {
                    tracing::debug!(error = %err, "weather lookup failed");
                    reply.set_text(WEATHER_FAIL);
                }
            }
        }

        reply.add_suggestion(Suggestion::new(EXIT_SUGGESTION, true));
        (reply, DialogState::Weather)
    }

    async fn weather_report(&self, utterance: &Utterance) -> Result<String, DialogError> {
        let place = utterance.first_place().ok_or_else(|| {
            DialogError::ClarificationNeeded("no place entity in utterance".to_string())
        })?;
        let point = self.geocoder.geocode(&place).await?;
        let fact = self.weather.current(point).await?;
        Ok(format!(
            "СЕГОДНЯ:\nТемпература: {}°C, ощущается как {}°C;\nУсловия: {},\nВетер: {} м/с;\nВЧЕРА:\nТемпература: {}°C",
            fact.temp,
            fact.feels_like,
            conditions::describe(&fact.condition),
            fact.wind_speed,
            fact.yesterday_temp,
        ))
    }

    async fn maps_turn(&self, utterance: &Utterance) -> (Reply, DialogState) {
        if intent::mentions_any(&utterance.tokens, intent::EXIT_WORDS) {
            // Leaving the state abandons the conversation's map crops.
            self.prune_images(None).await;
            return (Self::menu_reply(), DialogState::Choice);
        }

        let mut reply = Reply::new();
        match utterance.first_place() {
            Some(place) => match self.place_card(&place).await {
                Ok(image_id) => {
                    self.prune_images(Some(&image_id)).await;
                    reply.set_image(ImageCard {
                        image_id,
                        title: MAP_CARD_TITLE.to_string(),
                    });
                    reply.set_text(MAPS_INTRO);
                }
                Err(err) => {
                    tracing::warn!(place = %place, error = %err, "map card failed");
                    reply.set_text(MAPS_FAIL);
                }
            },
            None => reply.set_text(MAPS_INTRO),
        }

        (reply, DialogState::Maps)
    }

    /// Geocode the place, render the static map, upload the crop.
    /// Returns the hosted image id.
    async fn place_card(&self, place: &str) -> Result<String, DialogError> {
        let point = self.geocoder.geocode(place).await?;
        let map_url = self.map_renderer.render(point).await?;
        let image_id = self.images.upload_by_url(&map_url).await?;
        Ok(image_id)
    }

    /// Delete every hosted image except `keep`. Failures only log:
    /// pruning is quota hygiene, never worth failing the turn for.
    async fn prune_images(&self, keep: Option<&str>) {
        let ids = match self.images.list().await {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!(error = %err, "image listing failed, skipping prune");
                return;
            }
        };
        for id in ids {
            if Some(id.as_str()) == keep {
                continue;
            }
            if let Err(err) = self.images.delete(&id).await {
                tracing::warn!(image_id = %id, error = %err, "image delete failed");
            }
        }
    }
}
