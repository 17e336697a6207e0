fn main() {
    // Rerun if frontend changes
    println!("cargo:rerun-if-changed=frontend/");

    // The embedded UI ships in frontend/; recreate a minimal page if it was removed
    let index = std::path::Path::new("frontend/index.html");
    if !index.exists() {
        println!("cargo:warning=frontend/index.html not found, embedding a placeholder page");

        std::fs::create_dir_all("frontend").ok();
        std::fs::write(
            index,
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Fake Postman</title>
    <style>
        body { font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: #1e1e1e; color: #eee; }
        code { background: #333; padding: 2px 8px; border-radius: 4px; }
    </style>
</head>
<body>
    <div>
        <h1>Fake Postman</h1>
        <p>The proxy is running at <code>POST /api/proxy/execute</code>. The web UI was not embedded.</p>
    </div>
</body>
</html>"#,
        )
        .ok();
    }
}
