//! HTML pages for the roster, registration form and profile editor.

use crate::models::Player;
use crate::session::Flash;
use std::fmt::Write;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flashes: &[Flash], body: &str) -> String {
    let mut notices = String::new();
    for flash in flashes {
        let _ = write!(
            notices,
            r#"<div class="flash flash-{}">{}</div>"#,
            flash.level.as_str(),
            escape(&flash.message)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{}</title></head>
<body>
{}
{}
</body>
</html>"#,
        escape(title),
        notices,
        body
    )
}

fn stat(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn player_card(player: &Player) -> String {
    let color = player.theme_color.as_deref().unwrap_or("#444444");
    let style = player.card_style.as_deref().unwrap_or("classic");
    let avatar = match &player.avatar_url {
        Some(url) => format!(r#"<img class="avatar" src="{}" alt="">"#, escape(url)),
        None => String::new(),
    };

    format!(
        r#"<div class="card card-{}" style="border-color: {}">{}<h3>{}</h3><p>{} {} &middot; level {}</p><p>HP {} &middot; EN {} &middot; MP {}</p><p>W {} / L {} &middot; gold {}</p></div>"#,
        escape(style),
        escape(color),
        avatar,
        escape(&player.name),
        escape(&player.race),
        escape(&player.player_class),
        player.level,
        stat(player.health),
        stat(player.energy),
        stat(player.mana),
        player.wins,
        player.losses,
        player.gold
    )
}

/// The index page. Without a current player it shows the login/register overlay instead.
pub fn index(player: Option<&Player>, roster: &[Player], flashes: &[Flash]) -> String {
    let Some(player) = player else {
        let overlay = r#"<div class="auth-overlay">
<form method="post" action="/login">
<input name="name" placeholder="Name" required>
<input name="password" type="password" placeholder="Password" required>
<button type="submit">Log in</button>
</form>
<a href="/register">Create a character</a>
</div>"#;
        return layout("Guild Hall", flashes, overlay);
    };

    let mut body = String::new();
    let _ = write!(
        body,
        r#"<header>Logged in as <a href="/profile">{}</a><form method="post" action="/logout"><button type="submit">Log out</button></form></header>"#,
        escape(&player.name)
    );
    body.push_str(&player_card(player));
    body.push_str(r#"<section class="roster"><h2>Other players</h2>"#);
    if roster.is_empty() {
        body.push_str("<p>No other players yet.</p>");
    }
    for other in roster {
        body.push_str(&player_card(other));
    }
    body.push_str("</section>");

    layout("Guild Hall", flashes, &body)
}

pub fn register(name: &str, flashes: &[Flash]) -> String {
    let body = format!(
        r#"<form method="post" action="/register">
<input name="name" value="{}" placeholder="Name" required>
<input name="password" type="password" placeholder="Password" required>
<select name="race"><option>Human</option><option>Elf</option><option>Dwarf</option><option>Orc</option></select>
<select name="player_class"><option>Warrior</option><option>Rogue</option><option>Mage</option></select>
<button type="submit">Register</button>
</form>"#,
        escape(name)
    );
    layout("Register", flashes, &body)
}

pub fn profile(player: &Player, flashes: &[Flash]) -> String {
    let body = format!(
        r#"{}
<form method="post" action="/profile" enctype="multipart/form-data">
<textarea name="bio">{}</textarea>
<input name="theme_color" value="{}">
<input name="card_style" value="{}">
<input name="avatar" type="file" accept=".png,.jpg,.jpeg">
<button type="submit">Save</button>
</form>
<a href="/">Back</a>"#,
        player_card(player),
        escape(player.bio.as_deref().unwrap_or("")),
        escape(player.theme_color.as_deref().unwrap_or("")),
        escape(player.card_style.as_deref().unwrap_or(""))
    );
    layout("Profile", flashes, &body)
}
