//! Keyword data for the bundled languages.

use crate::keywords::KeywordCategory::{
    self, And, Background, But, Examples, Feature, Given, Rule, Scenario, ScenarioOutline, Then,
    When,
};

pub(crate) struct LanguageData {
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) categories: &'static [(KeywordCategory, &'static [&'static str])],
}

pub(crate) static BUILTIN: &[LanguageData] = &[
    LanguageData {
        code: "en",
        name: "English",
        categories: &[
            (Feature, &["Feature", "Business Need", "Ability"]),
            (Rule, &["Rule"]),
            (Background, &["Background"]),
            (Scenario, &["Example", "Scenario"]),
            (ScenarioOutline, &["Scenario Outline", "Scenario Template"]),
            (Examples, &["Examples", "Scenarios"]),
            (Given, &["* ", "Given "]),
            (When, &["* ", "When "]),
            (Then, &["* ", "Then "]),
            (And, &["* ", "And "]),
            (But, &["* ", "But "]),
        ],
    },
    LanguageData {
        code: "de",
        name: "Deutsch",
        categories: &[
            (Feature, &["Funktionalität", "Funktion"]),
            (Rule, &["Rule", "Regel"]),
            (
                Background,
                &["Grundlage", "Hintergrund", "Voraussetzungen", "Vorbedingungen"],
            ),
            (Scenario, &["Beispiel", "Szenario"]),
            (ScenarioOutline, &["Szenariogrundriss", "Szenarien"]),
            (Examples, &["Beispiele"]),
            (
                Given,
                &["* ", "Angenommen ", "Gegeben seien ", "Gegeben sei "],
            ),
            (When, &["* ", "Wenn "]),
            (Then, &["* ", "Dann "]),
            (And, &["* ", "Und "]),
            (But, &["* ", "Aber "]),
        ],
    },
    LanguageData {
        code: "fr",
        name: "français",
        categories: &[
            (Feature, &["Fonctionnalité"]),
            (Rule, &["Règle"]),
            (Background, &["Contexte"]),
            (Scenario, &["Exemple", "Scénario"]),
            (ScenarioOutline, &["Plan du scénario", "Plan du Scénario"]),
            (Examples, &["Exemples"]),
            (
                Given,
                &[
                    "* ",
                    "Soit ",
                    "Sachant que ",
                    "Sachant qu'",
                    "Sachant ",
                    "Étant donné que ",
                    "Étant donné qu'",
                    "Étant donné ",
                    "Etant donné ",
                ],
            ),
            (When, &["* ", "Quand ", "Lorsque ", "Lorsqu'"]),
            (Then, &["* ", "Alors ", "Donc "]),
            (And, &["* ", "Et que ", "Et qu'", "Et "]),
            (But, &["* ", "Mais que ", "Mais qu'", "Mais "]),
        ],
    },
    LanguageData {
        code: "es",
        name: "español",
        categories: &[
            (
                Feature,
                &["Característica", "Necesidad del negocio", "Requisito"],
            ),
            (Rule, &["Regla de negocio", "Regla"]),
            (Background, &["Antecedentes"]),
            (Scenario, &["Ejemplo", "Escenario"]),
            (ScenarioOutline, &["Esquema del escenario"]),
            (Examples, &["Ejemplos"]),
            (Given, &["* ", "Dado ", "Dada ", "Dados ", "Dadas "]),
            (When, &["* ", "Cuando "]),
            (Then, &["* ", "Entonces "]),
            (And, &["* ", "Y ", "E "]),
            (But, &["* ", "Pero "]),
        ],
    },
    LanguageData {
        code: "nl",
        name: "Nederlands",
        categories: &[
            (Feature, &["Functionaliteit"]),
            (Rule, &["Regel"]),
            (Background, &["Achtergrond"]),
            (Scenario, &["Voorbeeld", "Scenario"]),
            (ScenarioOutline, &["Abstract Scenario"]),
            (Examples, &["Voorbeelden"]),
            (Given, &["* ", "Gegeven ", "Stel "]),
            (When, &["* ", "Als ", "Wanneer "]),
            (Then, &["* ", "Dan "]),
            (And, &["* ", "En "]),
            (But, &["* ", "Maar "]),
        ],
    },
    LanguageData {
        code: "ja",
        name: "日本語",
        categories: &[
            (Feature, &["フィーチャ", "機能"]),
            (Rule, &["ルール"]),
            (Background, &["背景"]),
            (Scenario, &["シナリオ"]),
            (
                ScenarioOutline,
                &["シナリオアウトライン", "シナリオテンプレート", "テンプレ", "シナリオテンプレ"],
            ),
            (Examples, &["例", "サンプル"]),
            (Given, &["* ", "前提"]),
            (When, &["* ", "もし"]),
            (Then, &["* ", "ならば"]),
            (And, &["* ", "かつ"]),
            (But, &["* ", "しかし", "但し", "ただし"]),
        ],
    },
];
