/// Opening projects in the system browser
///
/// Project URLs may be site-relative ("/tronic/index.html"); those are resolved
/// against the configured site URL first.

use url::Url;

/// Resolve a project URL against the site root
pub fn resolve_url(site_url: &str, project_url: &str) -> Result<Url, url::ParseError> {
    match Url::parse(project_url) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(site_url)?.join(project_url),
        Err(err) => Err(err),
    }
}

/// Hand the URL to the platform opener without blocking the UI thread.
/// Returns the URL on success so the status bar can show it.
pub async fn open_in_browser(url: String) -> Result<String, String> {
    let mut command = opener_command(&url);
    let status = command
        .status()
        .await
        .map_err(|e| format!("Failed to launch browser: {}", e))?;

    if status.success() {
        Ok(url)
    } else {
        Err(format!("Browser launcher exited with {}", status))
    }
}

fn opener_command(url: &str) -> tokio::process::Command {
    #[cfg(target_os = "windows")]
    let (program, args) = windows_opener(url);
    #[cfg(target_os = "macos")]
    let (program, args) = macos_opener(url);
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let (program, args) = xdg_opener(url);

    let mut command = tokio::process::Command::new(program);
    command.args(args);
    command
}

// The URL always travels as a single argument and never through a shell;
// cmd.exe would split a query string at `&`.
#[cfg(any(target_os = "windows", test))]
fn windows_opener(url: &str) -> (&'static str, Vec<&str>) {
    ("rundll32", vec!["url.dll,FileProtocolHandler", url])
}

#[cfg(any(target_os = "macos", test))]
fn macos_opener(url: &str) -> (&'static str, Vec<&str>) {
    ("open", vec![url])
}

#[cfg(any(not(any(target_os = "macos", target_os = "windows")), test))]
fn xdg_opener(url: &str) -> (&'static str, Vec<&str>) {
    ("xdg-open", vec![url])
}
