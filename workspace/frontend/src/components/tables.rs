//! Card-wrapped tables and tag clouds over the constant rows in `mock_data`.

use model::theme::{Brand, Icon, Token, Tone};
use yew::prelude::*;

use crate::mock_data::{
    CompetitorShare, ModelComparison, ModelPerformance, PromptPerformance, PromptWinner,
};

#[derive(Properties, PartialEq)]
struct TableCardProps {
    title: AttrValue,
    #[prop_or_default]
    subtitle: Option<AttrValue>,
    children: Children,
}

#[function_component(TableCard)]
fn table_card(props: &TableCardProps) -> Html {
    html! {
        <div class={Token::CardSurface.class()}>
            <div class="card-body p-5">
                <h3 class={classes!("card-title", "text-lg", Token::PrimaryText.class())}>{&props.title}</h3>
                if let Some(subtitle) = &props.subtitle {
                    <p class={classes!("text-sm", Token::SecondaryText.class())}>{subtitle}</p>
                }
                <div class="overflow-x-auto mt-2">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

fn brand_tag(brand: Brand) -> Html {
    html! { <span class={brand.tag().class()}>{brand.name()}</span> }
}

#[derive(Properties, PartialEq)]
pub struct PromptWinnersProps {
    pub rows: &'static [PromptWinner],
}

#[function_component(PromptWinnersTable)]
pub fn prompt_winners_table(props: &PromptWinnersProps) -> Html {
    html! {
        <TableCard title="Prompt Winners" subtitle="Prompts where you consistently rank #1">
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{"Prompt"}</th>
                        <th>{"Top Brand"}</th>
                        <th class="text-right">{"#1 Rankings"}</th>
                        <th class="text-right">{"#1 Rate"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <tr class="hover">
                            <td class="max-w-md">{row.prompt}</td>
                            <td>{brand_tag(row.top_brand)}</td>
                            <td class="text-right">{row.number_ones}</td>
                            <td class={classes!("text-right", "font-medium", Token::PositiveIndicator.class())}>{row.rank_one_rate}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </TableCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModelComparisonProps {
    pub rows: &'static [ModelComparison],
}

/// Own brand against the strongest competitor, per AI model.
#[function_component(ModelComparisonTable)]
pub fn model_comparison_table(props: &ModelComparisonProps) -> Html {
    html! {
        <TableCard title="Model Comparison" subtitle="Your performance vs competitors by AI model">
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{"Model"}</th>
                        <th class="text-right">{"Your Mentions"}</th>
                        <th class="text-right">{"Competitor Mentions"}</th>
                        <th class="text-right">{"Your Rank"}</th>
                        <th class="text-right">{"Competitor Rank"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| {
                        // lower rank is better
                        let rank_tone = Tone::from_positive(row.your_rank <= row.their_rank);
                        html! {
                            <tr class="hover">
                                <td class="font-medium">{row.model}</td>
                                <td class="text-right">{row.your_mentions}</td>
                                <td class={classes!("text-right", Token::SecondaryText.class())}>{row.their_mentions}</td>
                                <td class={classes!("text-right", "font-medium", rank_tone.text().class())}>{format!("{:.1}", row.your_rank)}</td>
                                <td class={classes!("text-right", Token::SecondaryText.class())}>{format!("{:.1}", row.their_rank)}</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </TableCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct CompetitorRankingProps {
    pub rows: &'static [CompetitorShare],
}

#[function_component(CompetitorRankingTable)]
pub fn competitor_ranking_table(props: &CompetitorRankingProps) -> Html {
    html! {
        <TableCard title="Competitor Ranking" subtitle="Share of mentions across all models">
            <ul class="flex flex-col gap-3">
                { for props.rows.iter().enumerate().map(|(i, row)| html! {
                    <li class="flex items-center gap-3">
                        <span class={classes!("w-6", "text-sm", "font-bold", Token::SecondaryText.class())}>{format!("#{}", i + 1)}</span>
                        <span class="w-3 h-3 rounded-full" style={format!("background-color: {}", row.brand.color().hex())}></span>
                        <span class="flex-1">{brand_tag(row.brand)}</span>
                        <span class="text-sm">{row.mentions}</span>
                        <span class={classes!("w-16", "text-right", "text-sm", "font-medium", Token::PrimaryText.class())}>{row.share}</span>
                    </li>
                }) }
            </ul>
        </TableCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopPromptsProps {
    pub rows: &'static [PromptPerformance],
}

#[function_component(TopPromptsTable)]
pub fn top_prompts_table(props: &TopPromptsProps) -> Html {
    html! {
        <TableCard title="Top Performing Prompts">
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{"Prompt"}</th>
                        <th class="text-right">{"Mentions"}</th>
                        <th class="text-right">{"Visibility"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <tr class="hover">
                            <td>{row.prompt}</td>
                            <td class="text-right">{row.mentions}</td>
                            <td class="text-right font-medium">{row.visibility}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </TableCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModelPerformanceProps {
    pub rows: &'static [ModelPerformance],
}

#[function_component(ModelPerformanceGrid)]
pub fn model_performance_grid(props: &ModelPerformanceProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            { for props.rows.iter().map(|row| {
                let tone = Tone::from_positive(row.is_positive);
                html! {
                    <div class={Token::CardSurface.class()}>
                        <div class="card-body p-5 gap-3">
                            <div class="flex items-center justify-between">
                                <h4 class={classes!("font-semibold", Token::PrimaryText.class())}>
                                    <i class={classes!(Icon::Brain.class(), "mr-2")}></i>
                                    {row.model}
                                </h4>
                                <span class={tone.badge().class()}>{row.delta}</span>
                            </div>
                            <div class="grid grid-cols-3 gap-2 text-center">
                                <div>
                                    <p class={classes!("text-xs", Token::SecondaryText.class())}>{"Visibility"}</p>
                                    <p class="text-lg font-bold">{row.visibility}</p>
                                </div>
                                <div>
                                    <p class={classes!("text-xs", Token::SecondaryText.class())}>{"Mentions"}</p>
                                    <p class="text-lg font-bold">{row.mentions}</p>
                                </div>
                                <div>
                                    <p class={classes!("text-xs", Token::SecondaryText.class())}>{"Avg Rank"}</p>
                                    <p class="text-lg font-bold">{format!("{:.1}", row.rank)}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TagCloudProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub icon: Icon,
    pub tags: &'static [&'static str],
    pub tone: Tone,
}

#[function_component(TagCloud)]
pub fn tag_cloud(props: &TagCloudProps) -> Html {
    html! {
        <div class={Token::CardSurface.class()}>
            <div class="card-body p-5">
                <h3 class={classes!("card-title", "text-lg", Token::PrimaryText.class())}>
                    <i class={classes!(props.icon.class(), props.tone.text().class())}></i>
                    {&props.title}
                </h3>
                <p class={classes!("text-sm", Token::SecondaryText.class())}>{&props.subtitle}</p>
                <div class="flex flex-wrap gap-2 mt-2">
                    { for props.tags.iter().map(|tag| html! {
                        <span class={classes!(props.tone.badge().class(), "badge-lg")}>{*tag}</span>
                    }) }
                </div>
            </div>
        </div>
    }
}
