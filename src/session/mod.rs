//! Root session controller.
//!
//! Wires the pair list, the language catalog, and the synthesis result
//! to the four backend operations, holding the loading and error state
//! in between.

mod audio;
mod state;

pub use audio::{AudioClip, AudioError, DOWNLOAD_FILE_NAME};
pub use state::Session;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{
        BackendError, BulkTtsResponse, Language, LanguagesResponse, MockBackend, ParsedPair,
        ParsedPairsResponse,
    };
    use crate::pairs::{PairField, PairList, TextPair};
    use std::path::PathBuf;

    fn catalog_en_de() -> LanguagesResponse {
        LanguagesResponse {
            languages: vec![
                Language {
                    code: "en".to_string(),
                    name: "English".to_string(),
                },
                Language {
                    code: "de".to_string(),
                    name: "German".to_string(),
                },
            ],
        }
    }

    fn parsed(pairs: &[(&str, &str)]) -> ParsedPairsResponse {
        ParsedPairsResponse {
            pairs: pairs
                .iter()
                .map(|(text1, text2)| ParsedPair {
                    text1: text1.to_string(),
                    text2: text2.to_string(),
                })
                .collect(),
        }
    }

    fn pair(text1: &str, text2: &str, language1: &str, language2: &str) -> TextPair {
        TextPair {
            text1: text1.to_string(),
            text2: text2.to_string(),
            language1: language1.to_string(),
            language2: language2.to_string(),
        }
    }

    // ===========================================
    // Language catalog
    // ===========================================

    #[test]
    fn test_fetch_languages_initializes_both_defaults_to_first_code() {
        let mut mock = MockBackend::new();
        mock.expect_languages()
            .times(1)
            .returning(|| Ok(catalog_en_de()));

        let mut session = Session::new(mock);
        session.fetch_languages();

        assert_eq!(session.languages().len(), 2);
        assert_eq!(session.default_language1(), "en");
        assert_eq!(session.default_language2(), "en");
        assert!(session.error().is_none());
    }

    #[test]
    fn test_fetch_languages_failure_sets_error() {
        let mut mock = MockBackend::new();
        mock.expect_languages().times(1).returning(|| {
            Err(BackendError::ConnectionFailed(
                "Connection refused".to_string(),
            ))
        });

        let mut session = Session::new(mock);
        session.fetch_languages();

        assert!(session.languages().is_empty());
        assert_eq!(session.error(), Some("Failed to load languages"));
    }

    #[test]
    fn test_fetch_languages_keeps_restored_defaults() {
        let mut mock = MockBackend::new();
        mock.expect_languages()
            .times(1)
            .returning(|| Ok(catalog_en_de()));

        let mut session = Session::new(mock);
        session.restore(PairList::new(), "uk".to_string(), "pl".to_string());
        session.fetch_languages();

        assert_eq!(session.default_language1(), "uk");
        assert_eq!(session.default_language2(), "pl");
    }

    // ===========================================
    // Upload
    // ===========================================

    #[test]
    fn test_upload_appends_stamped_pairs() {
        let mut mock = MockBackend::new();
        mock.expect_upload_file()
            .times(1)
            .returning(|_| Ok(parsed(&[("Hallo", "Hello"), ("Danke", "Thanks")])));

        let mut session = Session::new(mock);
        session.set_default_language1("de");
        session.set_default_language2("en");
        session.upload_file(&PathBuf::from("words.csv"));

        assert_eq!(session.pairs().len(), 2);
        assert_eq!(
            session.pairs().get(0).unwrap(),
            &pair("Hallo", "Hello", "de", "en")
        );
        assert_eq!(
            session.pairs().get(1).unwrap(),
            &pair("Danke", "Thanks", "de", "en")
        );
    }

    #[test]
    fn test_upload_never_replaces_existing_pairs() {
        let mut mock = MockBackend::new();
        mock.expect_upload_file()
            .times(1)
            .returning(|_| Ok(parsed(&[("Bitte", "Please")])));

        let mut session = Session::new(mock);
        session.restore(
            PairList::from_pairs(vec![pair("Hallo", "Hello", "de", "en")]),
            "de".to_string(),
            "en".to_string(),
        );
        session.upload_file(&PathBuf::from("words.csv"));

        assert_eq!(session.pairs().len(), 2);
        assert_eq!(session.pairs().get(0).unwrap().text1, "Hallo");
        assert_eq!(session.pairs().get(1).unwrap().text1, "Bitte");
    }

    #[test]
    fn test_upload_failure_sets_error_and_keeps_pairs() {
        let mut mock = MockBackend::new();
        mock.expect_upload_file()
            .times(1)
            .returning(|_| Err(BackendError::RequestFailed("Status: 500".to_string())));

        let mut session = Session::new(mock);
        session.restore(
            PairList::from_pairs(vec![pair("Hallo", "Hello", "de", "en")]),
            "de".to_string(),
            "en".to_string(),
        );
        session.upload_file(&PathBuf::from("words.csv"));

        assert_eq!(session.error(), Some("Failed to process file"));
        assert_eq!(session.pairs().len(), 1);
    }

    // ===========================================
    // Paste
    // ===========================================

    #[test]
    fn test_paste_stamps_current_defaults() {
        let mut mock = MockBackend::new();
        mock.expect_parse_bulk_text()
            .withf(|text| text == "Hallo\nHello\nDanke\nThanks")
            .times(1)
            .returning(|_| Ok(parsed(&[("Hallo", "Hello"), ("Danke", "Thanks")])));

        let mut session = Session::new(mock);
        session.set_default_language1("de");
        session.set_default_language2("en");
        session.paste_text("Hallo\nHello\nDanke\nThanks");

        assert_eq!(session.pairs().len(), 2);
        for row in session.pairs().iter() {
            assert_eq!(row.language1, "de");
            assert_eq!(row.language2, "en");
        }
    }

    #[test]
    fn test_paste_failure_sets_error() {
        let mut mock = MockBackend::new();
        mock.expect_parse_bulk_text()
            .times(1)
            .returning(|_| Err(BackendError::RequestFailed("Status: 500".to_string())));

        let mut session = Session::new(mock);
        session.paste_text("Hallo\nHello");

        assert_eq!(session.error(), Some("Failed to process text"));
        assert!(session.pairs().is_empty());
    }

    #[test]
    fn test_newest_error_overwrites_previous() {
        let mut mock = MockBackend::new();
        mock.expect_upload_file()
            .times(1)
            .returning(|_| Err(BackendError::RequestFailed("Status: 500".to_string())));
        mock.expect_parse_bulk_text()
            .times(1)
            .returning(|_| Err(BackendError::RequestFailed("Status: 500".to_string())));

        let mut session = Session::new(mock);
        session.upload_file(&PathBuf::from("words.csv"));
        assert_eq!(session.error(), Some("Failed to process file"));

        session.paste_text("Hallo\nHello");
        assert_eq!(session.error(), Some("Failed to process text"));
    }

    // ===========================================
    // Generate
    // ===========================================

    #[test]
    fn test_generate_produces_data_uri() {
        let mut mock = MockBackend::new();
        mock.expect_bulk_tts().times(1).returning(|_| {
            Ok(BulkTtsResponse {
                audio: "QQ==".to_string(),
            })
        });

        let mut session = Session::new(mock);
        session.restore(
            PairList::from_pairs(vec![pair("Hallo", "Hello", "de", "en")]),
            "de".to_string(),
            "en".to_string(),
        );
        session.generate_speech();

        assert_eq!(
            session.audio().unwrap().data_uri(),
            "data:audio/mp3;base64,QQ=="
        );
        assert!(!session.is_loading());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_generate_posts_full_pair_list() {
        let mut mock = MockBackend::new();
        mock.expect_bulk_tts()
            .withf(|pairs| {
                pairs.len() == 2 && pairs[0].text1 == "Hallo" && pairs[1].text1 == "Danke"
            })
            .times(1)
            .returning(|_| {
                Ok(BulkTtsResponse {
                    audio: "QQ==".to_string(),
                })
            });

        let mut session = Session::new(mock);
        session.restore(
            PairList::from_pairs(vec![
                pair("Hallo", "Hello", "de", "en"),
                pair("Danke", "Thanks", "de", "en"),
            ]),
            "de".to_string(),
            "en".to_string(),
        );
        session.generate_speech();

        assert!(session.audio().is_some());
    }

    #[test]
    fn test_generate_failure_sets_error_and_clears_loading() {
        let mut mock = MockBackend::new();
        mock.expect_bulk_tts()
            .times(1)
            .returning(|_| Err(BackendError::RequestFailed("Status: 500".to_string())));

        let mut session = Session::new(mock);
        session.restore(
            PairList::from_pairs(vec![pair("Hallo", "Hello", "de", "en")]),
            "de".to_string(),
            "en".to_string(),
        );
        session.generate_speech();

        assert_eq!(
            session.error(),
            Some("Failed to generate speech. Please try again.")
        );
        assert!(!session.is_loading());
        assert!(session.audio().is_none());
        assert_eq!(session.pairs().len(), 1);
    }

    #[test]
    fn test_generate_clears_prior_error_on_success() {
        let mut mock = MockBackend::new();
        mock.expect_upload_file()
            .times(1)
            .returning(|_| Err(BackendError::RequestFailed("Status: 500".to_string())));
        mock.expect_bulk_tts().times(1).returning(|_| {
            Ok(BulkTtsResponse {
                audio: "QQ==".to_string(),
            })
        });

        let mut session = Session::new(mock);
        session.upload_file(&PathBuf::from("words.csv"));
        assert!(session.error().is_some());

        session.generate_speech();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_generate_failure_discards_prior_audio() {
        let mut mock = MockBackend::new();
        let mut calls = 0;
        mock.expect_bulk_tts().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(BulkTtsResponse {
                    audio: "QQ==".to_string(),
                })
            } else {
                Err(BackendError::RequestFailed("Status: 500".to_string()))
            }
        });

        let mut session = Session::new(mock);
        session.restore(
            PairList::from_pairs(vec![pair("Hallo", "Hello", "de", "en")]),
            "de".to_string(),
            "en".to_string(),
        );

        session.generate_speech();
        assert!(session.audio().is_some());

        session.generate_speech();
        assert!(session.audio().is_none());
    }

    // ===========================================
    // Clear all
    // ===========================================

    #[test]
    fn test_clear_all_resets_pairs_and_audio_only() {
        let mut mock = MockBackend::new();
        mock.expect_languages()
            .times(1)
            .returning(|| Ok(catalog_en_de()));
        mock.expect_bulk_tts().times(1).returning(|_| {
            Ok(BulkTtsResponse {
                audio: "QQ==".to_string(),
            })
        });

        let mut session = Session::new(mock);
        session.fetch_languages();
        session.restore(
            PairList::from_pairs(vec![pair("Hallo", "Hello", "de", "en")]),
            "de".to_string(),
            "en".to_string(),
        );
        session.generate_speech();

        session.clear_all();

        assert!(session.pairs().is_empty());
        assert!(session.audio().is_none());
        assert_eq!(session.languages().len(), 2);
        assert_eq!(session.default_language1(), "de");
        assert_eq!(session.default_language2(), "en");
    }

    // ===========================================
    // Row operations through the session
    // ===========================================

    #[test]
    fn test_edit_pair_applies_to_latest_list() {
        let mock = MockBackend::new();

        let mut session = Session::new(mock);
        session.restore(
            PairList::from_pairs(vec![
                pair("Hallo", "Hello", "de", "en"),
                pair("Danke", "Thanks", "de", "en"),
            ]),
            "de".to_string(),
            "en".to_string(),
        );

        session.remove_pair(0).unwrap();
        session.edit_pair(0, PairField::Text2, "Thank you").unwrap();

        assert_eq!(session.pairs().len(), 1);
        assert_eq!(session.pairs().get(0).unwrap().text1, "Danke");
        assert_eq!(session.pairs().get(0).unwrap().text2, "Thank you");
    }

    #[test]
    fn test_swap_pair_round_trip() {
        let mock = MockBackend::new();

        let mut session = Session::new(mock);
        session.restore(
            PairList::from_pairs(vec![pair("Hallo", "Hello", "de", "en")]),
            "de".to_string(),
            "en".to_string(),
        );

        session.swap_pair(0).unwrap();
        assert_eq!(
            session.pairs().get(0).unwrap(),
            &pair("Hello", "Hallo", "en", "de")
        );

        session.swap_pair(0).unwrap();
        assert_eq!(
            session.pairs().get(0).unwrap(),
            &pair("Hallo", "Hello", "de", "en")
        );
    }

    #[test]
    fn test_row_operation_out_of_bounds_is_an_error() {
        let mock = MockBackend::new();

        let mut session = Session::new(mock);

        assert!(session.edit_pair(0, PairField::Text1, "x").is_err());
        assert!(session.swap_pair(0).is_err());
        assert!(session.remove_pair(0).is_err());
        assert!(session.error().is_none());
    }
}
