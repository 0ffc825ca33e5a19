use anyhow::Result;
use fs_err as fs;
use std::path::Path;

const BASE_HTML: &str = "<!DOCTYPE html>
<html>
<head>
    <meta charset='utf-8'>
    <title>{{page.title}}</title>
    <meta name='viewport' content='width=device-width, initial-scale=1'>
</head>
<body>
    <header>
        <h1>{{store.name}}</h1>
    </header>
    <main>
        {{content}}
    </main>
    <footer>
        <p>&copy; {{store.name}}</p>
    </footer>
</body>
</html>";

const CART_HTML: &str = "<div class='cart-page'>
    <h2>Shopping Cart</h2>
    <div class='cart-items'>
        {{#each cart.items}}
        <div class='cart-item'>
            <h3>{{name}}</h3>
            <p>Price: {{price}}</p>
            <p>Quantity: {{quantity}}</p>
        </div>
        {{/each}}
    </div>
    <div class='cart-total'>
        <p>Total: {{cart.total}}</p>
    </div>
    <div class='checkout-section'>
        <button class='btn-checkout'>Checkout</button>
    </div>
</div>";

const CART_PREVIEW_HTML: &str = "<div class='cart-preview'>
    <h3>Cart Preview</h3>
    <div class='cart-items-preview'>
        {{#each cart.items}}
        <div class='cart-item-preview'>
            <span>{{name}}</span>
            <span>{{price}}</span>
        </div>
        {{/each}}
    </div>
    <div class='cart-actions'>
        <a href='/cart' class='view-cart'>View Cart</a>
        <a href='/checkout' class='checkout-button'>Checkout</a>
    </div>
</div>";

/// Stand-in Stencil theme used when the requested theme directory is missing.
pub fn create_minimal_theme(root: &Path) -> Result<()> {
    for dir in [
        "templates/layout",
        "templates/pages",
        "templates/components/cart",
        "assets/css",
        "assets/js",
    ] {
        fs::create_dir_all(root.join(dir))?;
    }
    fs::write(root.join("templates/layout/base.html"), BASE_HTML)?;
    fs::write(root.join("templates/pages/cart.html"), CART_HTML)?;
    fs::write(root.join("templates/components/cart/preview.html"), CART_PREVIEW_HTML)?;
    Ok(())
}
