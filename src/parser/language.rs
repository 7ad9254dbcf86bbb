use whatlang::{Lang, detect};

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 50;

/// Statistical language detection, used when the document carries no
/// `<html lang>` attribute. Short or ambiguous text yields `None`.
pub fn detect_language(text: &str) -> Option<String> {
    if text.trim().len() < MIN_TEXT_LENGTH {
        return None;
    }

    let info = detect(text)?;
    if info.confidence() < MIN_CONFIDENCE {
        return None;
    }
    Some(lang_code(info.lang()).to_string())
}

/// ISO 639-1 codes for the languages we see most; everything else falls back
/// to whatlang's three-letter code.
fn lang_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Por => "pt",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Tur => "tr",
        Lang::Pol => "pl",
        Lang::Swe => "sv",
        other => other.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_english() {
        let text = "This is a test of the language detection system. It should work well enough.";
        assert_eq!(detect_language(text), Some("en".to_string()));
    }

    #[test]
    fn detects_spanish() {
        let text = "Esto es una prueba del sistema de detección de idiomas en español. Debería funcionar bien.";
        assert_eq!(detect_language(text), Some("es".to_string()));
    }

    #[test]
    fn short_text_returns_none() {
        assert_eq!(detect_language("Short"), None);
    }

    #[test]
    fn symbol_noise_returns_none() {
        let text = "1 2 3 4 5 6 7 8 9 0 ! @ # $ % ^ & * ( ) - = + [ ] { } | : ; < > , . ? /";
        assert_eq!(detect_language(text), None);
    }
}
