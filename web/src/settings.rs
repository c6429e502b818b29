use memento_core as game;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

pub(crate) fn grid_label((rows, columns): (game::Dim, game::Dim)) -> String {
    format!("{}x{}", rows, columns)
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub selected: String,
    pub onselect: Callback<String>,
    pub onapply: Callback<()>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let onchange = {
        let onselect = props.onselect.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onselect.emit(select.value());
        })
    };

    let onclick = {
        let onapply = props.onapply.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            onapply.emit(());
        })
    };

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <label>
                    {"Grid"}
                    <select {onchange}>
                        {
                            for game::GRID_PRESETS.iter().map(|&grid| {
                                let label = grid_label(grid);
                                let selected = label == props.selected;
                                html! {
                                    <option value={label.clone()} {selected}>{label}</option>
                                }
                            })
                        }
                    </select>
                </label>
                <footer>
                    <button {onclick}>{"Reset"}</button>
                </footer>
            </article>
        </dialog>
    }
}
