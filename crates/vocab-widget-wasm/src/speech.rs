use web_sys::SpeechSynthesisUtterance;

use vocab_widget::{Speaker, SpeechConfig, SpeechError};

/// Web Speech API
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpeaker;

impl Speaker for BrowserSpeaker {
    fn speak(&self, text: &str, config: &SpeechConfig) -> Result<(), SpeechError> {
        let window = web_sys::window().ok_or(SpeechError::NotSupported)?;
        let synth = window
            .speech_synthesis()
            .map_err(|_| SpeechError::NotSupported)?;

        let utterance = SpeechSynthesisUtterance::new_with_text(text)
            .map_err(|err| SpeechError::SpeakFailed(format!("{err:?}")))?;
        utterance.set_lang(&config.language);
        utterance.set_rate(config.rate);
        utterance.set_pitch(config.pitch);

        synth.speak(&utterance);
        Ok(())
    }
}
