use crate::dto::UsuarioForm;
use crate::models::Usuario;
use crate::ui::RowView;

use super::Resource;

/// Usuarios: solo listado y alta
pub struct Usuarios;

impl Resource for Usuarios {
    type Record = Usuario;
    type CreateForm = UsuarioForm;
    type EditForm = ();

    const NAME: &'static str = "usuarios";
    const PATH: &'static str = "/usuarios/";
    const COLUMNS: usize = 3;

    const MSG_LOAD_ERROR: &'static str = "Erro ao carregar usuários.";
    const MSG_CREATED: &'static str = "Usuário cadastrado com sucesso!";

    fn row(usuario: &Usuario) -> RowView {
        RowView::new(
            usuario.id,
            usuario.nome.clone(),
            vec![usuario.id.to_string(), usuario.nome.clone(), usuario.email.clone()],
        )
    }

    fn empty_text(_filtered: bool) -> &'static str {
        "Nenhum usuário encontrado."
    }

    fn count_text(count: usize) -> String {
        format!("{count} usuário(s) encontrado(s)")
    }
}
