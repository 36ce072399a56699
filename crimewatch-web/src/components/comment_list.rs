use shared::models::Comment;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct CommentListProps {
    pub comments: Vec<Comment>,
}

#[function_component(CommentList)]
pub fn comment_list(props: &CommentListProps) -> Html {
    if props.comments.is_empty() {
        return html! {
            <div class="text-center py-8 text-base-content/60">
                {"No comments yet. Be the first to comment!"}
            </div>
        };
    }

    html! {
        <div class="space-y-4">
            { for props.comments.iter().map(|comment| html! {
                <div key={comment.id.to_string()} class="p-4 bg-base-200 rounded-lg">
                    <div class="flex items-center justify-between mb-1">
                        <span class="font-medium">{ &comment.user_name }</span>
                        <span class="text-sm text-base-content/60">{ comment.created_at.short() }</span>
                    </div>
                    <p class="text-base-content/80">{ &comment.comment_text }</p>
                </div>
            })}
        </div>
    }
}
